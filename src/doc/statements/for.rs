/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are numbers or numeric variables, optionally negated.
## Purpose
Used with `NEXT` to repeat execution of statements
while iterating over a sequence of numbers.

## Remarks
If we wanted the numbers 1,3,5,7 we would write `FOR I=1 TO 7 STEP 2`.
On the first iteration, 1 will be assigned to variable I.
Statements execute until the matching `NEXT` statement.
On subsequent iterations, the variable I gets 2 added to it.
If the result exceeds 7 the loop ends.
Otherwise the statements get executed again.

The bounds are not full expressions. `FOR I=1 TO N+1` is a `SYNTAX ERROR`;
assign `N+1` to a variable first.

The matching `NEXT` must exist further down the program or a
`FOR WITHOUT NEXT` error occurs. Starting a `FOR` again on a variable
that is already looping restarts that loop.

`FOR` is not allowed in direct mode.

The first iteration always executes even if starting past the end.

## Example 1
```text
10 FOR I = 5 TO 1 STEP -1
20 PRINT I;
30 NEXT I
40 PRINT
RUN
54321
```

## Example 2
```text
10 FOR X=1 TO 2
20 FOR Y=5 TO 6
30 PRINT X,Y
40 NEXT Y
50 NEXT X
RUN
1       5
1       6
2       5
2       6
```

*/

/*!
# `IF <expression> THEN <statements>`

## Purpose
Executes the statements after `THEN` when the expression is not zero.

## Remarks
`IF` takes the rest of its line, colons included. The condition is a
single expression such as `A < 10` or `N`. Comparisons give `-1`
for true and `0` for false.

An `IF` may follow `THEN` up to 16 deep.

## Example
```text
10 N = N + 1
20 IF N < 3 THEN PRINT N: GOTO 10
30 PRINT "DONE"
RUN
1
2
DONE
```

*/

/*!
# `DATA <number>[,<number>]`

## Purpose
`DATA` defines a list of numbers to be read in sequentially.

## Remarks
All `DATA` statements are collected, in line order, before the program
starts. Executing a `DATA` statement does nothing. The `READ` statement
loads the next value into a variable and `RESTORE` starts over from
the first value.

Only numbers are allowed. A string stops the collection of that line
with a `TYPE MISMATCH` and the values after it are skipped.

## Example
```text
10 READ A, B
20 PRINT A, B
30 DATA 3, -1.5
RUN
3       -1.5
```

*/

/*!
# `NEXT [<variable>]`

## Purpose
Ends the statements repeated by `FOR`.

## Remarks
Without a variable, `NEXT` continues the innermost loop. With one, it
continues the loop of that variable and ends any loops started inside it.
A `NEXT` with no loop to continue reports `NEXT WITHOUT FOR`.
`NEXT` is not allowed in direct mode.

## Example
```text
10 FOR I = 1 TO 2: FOR J = 1 TO 3: NEXT: PRINT I;J: NEXT
RUN
14
24
```

*/

/*!
# `RESTORE`

## Purpose
The next `READ` starts again from the first `DATA` value.

## Example
```text
10 DATA 7
20 READ A: RESTORE: READ B
30 PRINT A;B
RUN
77
```

*/

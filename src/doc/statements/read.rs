/*!
# `READ <variable>[,<variable>]`

## Purpose
Loads the next `DATA` values into numeric variables.

## Remarks
Reading past the last value reports `OUT OF DATA`; that variable and
the ones after it keep their values. String variables cannot be read.

## Example
```text
10 DATA 1, 2, 3
20 READ A, B
30 PRINT A;B
RUN
12
```

*/

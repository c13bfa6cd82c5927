/*!
# `GOSUB <line number>`

## Purpose
Calls a subroutine. `RETURN` continues with the statement after the `GOSUB`.

## Remarks
Subroutines may call other subroutines up to 100 deep. Going deeper
reports `OUT OF MEMORY` and the `GOSUB` does not jump.
If `<line number>` doesn't exist an `UNDEFINED LINE` error will occur.
`GOSUB` is not allowed in direct mode.

## Example
```text
10 GOSUB 100: PRINT "BACK"
20 END
100 PRINT "SUBROUTINE"
110 RETURN
RUN
SUBROUTINE
BACK
```

*/

/*!
# `END`

## Purpose
Stops the program.

## Remarks
A program also stops after its last line. `END` is useful to keep
execution from falling into subroutines placed after the main program.

## Example
```text
10 GOSUB 100
20 END
100 PRINT "SUBROUTINE"
110 RETURN
```

*/

/*!
# `RUN [<line number>]`

## Purpose
Starts the program from the first line or from the given line.

## Remarks
`RUN` clears all variables and starts `READ` from the first `DATA`
value. Inside a program, `RUN` starts the program over.

*/

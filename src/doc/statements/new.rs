/*!
# `NEW`

## Purpose
Erases the program, all variables and the `DATA` values.

## Remarks
Inside a running program `NEW` also stops it.

*/

/*!
# `RETURN`

## Purpose
Returns from a subroutine called with `GOSUB`.

## Remarks
A `RETURN` without a `GOSUB` reports `RETURN WITHOUT GOSUB`.
Changing the program forgets every pending `RETURN`.

*/

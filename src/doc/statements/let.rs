/*!
# `[LET] <variable>=<expression>`

## Purpose
Assigns a value to a variable. The word `LET` is optional.

## Remarks
A missing `=` is a `SYNTAX ERROR`. A string variable only accepts a
string literal or another string variable.

## Example
```text
10 LET A = 2
20 B = A * 4
30 C$ = "EIGHT"
40 PRINT B;" IS ";C$
RUN
8 IS EIGHT
```

*/

/*!
# `LIST [<line number>][-[<line number>]]`

## Purpose
Prints the stored program.

## Remarks
`LIST 20` shows one line, `LIST 20-` from line 20 to the end,
`LIST -20` from the start to line 20 and `LIST 10-20` the lines between.
A comma may be used instead of the dash.

Lines are shown with a single space between tokens.

## Example
```text
10 print"HI";x
LIST
10 PRINT "HI" ; x
```

*/

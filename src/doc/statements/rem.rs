/*!
# `REM <remark>` or `' <remark>`

## Purpose
A comment. Everything after `REM` or `'` is ignored, colons included.

## Example
```text
10 REM THIS PROGRAM DOES NOTHING : PRINT "NOT PRINTED"
20 ' NEITHER DOES THIS LINE
```

*/

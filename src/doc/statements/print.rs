/*!
# `PRINT [-e] [<item>][;|,][<item>]...`

## Purpose
Prints strings, numbers and variables.

## Remarks
A comma prints a tab and a semicolon prints nothing. A semicolon at
the end keeps the cursor on the same line. `TAB n` prints `n` spaces,
up to 255.
`PRINT` does not evaluate expressions; operators and other words
print as a single space.

With `-e` first, backslash escapes in strings are understood:
`\n` `\t` `\\` `\r` `\b` `\f` `\v`.

## Example
```text
PRINT "A";"B"
AB
PRINT "X", 1.50
X       1.5
PRINT -e "ONE\tTWO"
ONE     TWO
```

*/

/*!
# Expressions and Types

CBSH has two types of data: numbers and strings. Variable names are
a letter followed by letters, digits or underscores. A name ending in
`$` holds a string; every other name holds a number. Names are not
case sensitive, so `total` and `TOTAL` are the same variable.

A variable that was never assigned reads as `0` or as an empty string.
The type of a variable never changes. Assigning a number to `A$` is a
`TYPE MISMATCH` and the variable keeps its old value.

```text
LET PI = 3.14
NAME$ = "JACK"
```

## Expressions

There is no operator precedence. An expression is a single value or
exactly one operation between two values.

```text
X = 3
X = Y
X = -Y
X = Y * 2
X = -Y / -2
```

`X = 1 + 2 + 3` is a `SYNTAX ERROR`. Compute it in two steps instead.
Dividing by zero reports `DIVISION BY ZERO` and the result is `0`.

| Operator | Result |
|----------|--------|
| `+` `-` `*` `/` | Arithmetic |
| `=` `<` `>` | `-1` when true, `0` when false |

Strings have no operators. A string expression is a quoted literal
or a string variable.

## Numbers

Numbers are double precision. Literals are digits with an optional
decimal point; a leading minus sign is part of the expression.
`PRINT` shows numbers with up to six significant digits. It prints
values and variables but does not evaluate expressions.

```text
X = 1 / 3: PRINT X
0.333333
PRINT 1000000
1e+06
```

*/

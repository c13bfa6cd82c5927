/*!
# Limits and Internals

ROM BASIC was interpreted from slightly tokenized strings, and so is
CBSH. Each line is split into tokens once, when it is typed. Keywords
are recognized at that point; there is no syntax tree. Statements are
interpreted from their tokens every time they execute.

A running program is addressed by statement, not by line. Every line
holds a list of colon-separated statements and execution moves from
one statement to the next, rolling over to the first statement of the
following line. `GOSUB` remembers the statement after itself. `FOR`
remembers the statement after itself, once it has checked that a
matching `NEXT` follows.

All `DATA` values are gathered by one pass over the program before it
starts. The pass is skipped when the program has not changed since
the last one.

Each of the following has a fixed limit.

Programs are limited to 1000 lines. Line numbers are 1 to 65529.
Storing more lines reports `OUT OF MEMORY`.

`GOSUB` may nest 100 deep.

`DATA` is limited to 1000 values in total.

`IF ... THEN IF ... THEN` may nest 16 deep.

`TAB` in `PRINT` is limited to 255 spaces. A larger count reports
`ILLEGAL FUNCTION CALL`.

`FOR` loops are limited only by the number of variables, since a
variable can run only one loop at a time.

Changing the program while it is stopped inside a subroutine or loop
forgets the pending `RETURN` and `NEXT` positions, because stored
positions move when lines are inserted.

*/

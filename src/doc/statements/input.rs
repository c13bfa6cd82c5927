/*!
# `INPUT ["<prompt>"[;]] <variable>`

## Purpose
Reads one line typed by the user into a variable.

## Remarks
Without a prompt string `? ` is shown. A string variable receives the
line exactly as typed. A numeric variable receives the number; an empty
line is `0`. Spaces before the number are skipped, but anything after
it, trailing spaces included, reports `TYPE MISMATCH` and stores `0`.

## Example
```text
10 INPUT "YOUR NAME? "; N$
20 PRINT "HELLO ";N$
RUN
YOUR NAME? JACK
HELLO JACK
```

*/

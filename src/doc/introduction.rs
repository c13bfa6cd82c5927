/*!
# Introductory Tutorial for CBSH

Begin by opening a terminal and running `cbsh`. If you get the
following, you are ready for this tutorial. Type CTRL-D to exit.
<pre><code>&nbsp;  CBSH - Commodore BASIC Shell, version 1.0
&nbsp;
&nbsp;  READY.
&nbsp;> █
</code></pre>

When you see the `>` prompt, CBSH is ready to accept a statement.
A statement describes the work you want the computer to do. Lines
that you type are marked with a "`>`".

<pre><code>&nbsp;> print "Hello World"
&nbsp;  Hello World
</code></pre>

Entering a statement which executes immediately is called direct mode.
To build a program, put the statement on a numbered line. Line numbers
run from 1 to 65529. A line numbered 0 is the same as direct mode.

<pre><code>&nbsp;> 10 print "Hello World"
</code></pre>

Nothing happens. The line is stored to be executed later. Typing the
same line number again replaces the stored line.

<pre><code>&nbsp;> LIST
&nbsp;  10 PRINT "Hello World"
&nbsp;> RUN
&nbsp;  Hello World
</code></pre>

Several statements may share a line when separated by colons.
`IF` and `REM` always take the rest of their line.

<pre><code>&nbsp;> 20 FOR I = 1 TO 3: PRINT I: NEXT I
&nbsp;> RUN
&nbsp;  Hello World
&nbsp;  1
&nbsp;  2
&nbsp;  3
</code></pre>

Errors are printed with a leading `?` and the line where they happened.
Execution then continues with the next statement.

<pre><code>&nbsp;> 30 X = 6 / 0: PRINT X
&nbsp;> RUN 30
&nbsp;  ?DIVISION BY ZERO IN 30
&nbsp;  0
</code></pre>

Use `NEW` to erase the program and all variables.

*/

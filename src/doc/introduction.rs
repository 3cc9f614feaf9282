/*!
# Introductory Tutorial

BASIC runs programs stored in text files. Write a program with any editor
and hand the file name to the executable.

<pre><code>&nbsp;$ cat hello.bas
&nbsp;PRINT "Hello World"
&nbsp;$ basic hello.bas
&nbsp;Hello World
</code></pre>

Every `PRINT` item is followed by a single space and every `PRINT` ends
the line. Items are joined with semicolons.

<pre><code>&nbsp;PRINT "TWO AND TWO IS"; 2+2
&nbsp;TWO AND TWO IS 4
</code></pre>

## Lines and labels

A program is a list of lines run from top to bottom. Any line may start
with a number or with a name followed by a colon. Both are labels that
`GOTO` and `GOSUB` can jump to. Numbers need not be in order and lines
without a label are fine.

```text
COUNT% = 1
LOOP: PRINT COUNT%
COUNT% = COUNT% + 1
IF COUNT% <= 3 THEN GOTO LOOP
100 PRINT "DONE"
```

Several statements can share a line when separated by colons. A long line
can be split by ending it with `&`; the next line is joined on with a
single space.

```text
A = 1 : B = 2 : PRINT A + B
PRINT "THIS IS A VERY LONG " + &
      "STATEMENT"
```

Comments start with `REM` or an apostrophe and run to the end of the line.

## Running

`basic FILE` loads the whole file before running anything. Problems such
as an unknown character, a malformed assignment or a label used twice are
reported without running a single line. Errors found while running stop
the program and print the line they happened on.

<pre><code>&nbsp;$ basic oops.bas
&nbsp;?DIVISION BY ZERO
&nbsp;PRINT 1/0
</code></pre>

Stop a running program with CTRL-C. It ends with `?BREAK` just like the
`STOP` statement. A program waiting in `INPUT` only notices once a line is
entered; press CTRL-C a second time to end it right away.

Program files may be UTF-8 or Windows-1251. `INPUT` accepts either too.

`RND` draws from a generator seeded with the clock when a run starts.
Pass `--seed` to get the same numbers every time.

Set `BASIC_LOG` to a filter such as `debug` to see jumps, subroutine calls
and labels traced on stderr.

*/

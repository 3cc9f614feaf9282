/*!
# `INPUT ["<prompt>",]<variable>[,<variable>...]`

## Purpose
Suspends execution and reads values from the terminal.

## Remarks
Prompts are printed followed by a space. Values are separated by spaces
or newlines. A string variable reads one word, except when it is the last
item which reads the rest of the line.

A value that doesn't fit a numeric variable prints
`?[ value ] INAPPROPRIATE INPUT VALUE` and leaves the variable unchanged.
Running out of input is an `INPUT PAST END` error.

## Example
```text
INPUT "WHAT IS YOUR AGE AND NAME?", AGE%, NAME$
```

*/

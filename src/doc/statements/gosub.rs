/*!
# `GOSUB <label>`

## Purpose
Call a subroutine.

## Remarks
The line after the `GOSUB` is saved and execution moves to the label.
`RETURN` goes back to the saved line. Statements after the `GOSUB` on
the same line are skipped when the subroutine returns.
Calls nest up to 65,536 deep.

## Example
```text
GOSUB GREET
PRINT "WORLD"
END
GREET: PRINT "HELLO"
RETURN
```
Output:
```text
HELLO
WORLD
```

*/

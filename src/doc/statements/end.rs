/*!
# `END`

## Purpose
Stop running the program.

## Remarks
`END` at the end of a program is optional. Running past the last
line ends the program the same way.

## Example
```text
PRINT "HELLO"
END
PRINT "THIS DOES NOT PRINT"
```
Output:
```text
HELLO
```

*/

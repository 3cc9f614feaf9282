/*!
# `GOTO <label>`

## Purpose
Immediately and unconditionally move execution to the labeled line.

## Remarks
A label is a line number or a name. If the label doesn't exist an
`UNDEFINED LABEL` error naming it will occur when the `GOTO` runs.

## Example
```text
GOTO 30
PRINT "THIS WILL NOT PRINT"
30 PRINT "THIS WILL PRINT"
```

*/

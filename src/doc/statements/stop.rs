/*!
# `STOP`

## Purpose
Interrupt the program with a `BREAK` error.

## Remarks
Typically used for debugging. The program ends unsuccessfully and the
`STOP` line is shown.

## Example
```text
STOP
```
Output:
```text
?BREAK
STOP
```

*/

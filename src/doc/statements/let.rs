/*!
# `[LET] <variable>=<expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is optional. The value is converted to the type of the
variable. A real stored in an integer is truncated toward zero.

## Example
```text
A = 10
PRINT A
LET A% = 7.9
PRINT A%
```
Output:
```text
10
7
```

*/

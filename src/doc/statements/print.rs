/*!
# `PRINT [<expression>[;<expression>...]]`

## Purpose
Output information to the terminal for the operator.

## Remarks
Each expression is printed followed by a space. A newline ends every
`PRINT`, and a `PRINT` by itself outputs just the newline. `?` is
short for `PRINT`.

## Example
```text
PRINT "TOTAL"; 3 * 4; "ITEMS"
? 1/3
```
Output:
```text
TOTAL 12 ITEMS
0.333333
```

*/

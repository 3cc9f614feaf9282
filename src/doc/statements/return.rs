/*!
# `RETURN`

## Purpose
`RETURN` is used at the end of a subroutine.

## Remarks
See `GOSUB`. A `RETURN` without a `GOSUB` is a
`RETURN WITHOUT GOSUB` error.

## Example
```text
GOSUB 100
PRINT "WORLD"
END
100 PRINT "HELLO"
RETURN
```

*/

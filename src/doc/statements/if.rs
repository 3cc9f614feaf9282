/*!
# `IF <expression> THEN <statements> [ELSE <statements>]`
Also `IF <expression> GOTO <label>` and `IF <expression> GOSUB <label>`.

## Purpose
Do something contingent on a predicate.

## Remarks
The expression must be a comparison or a combination of comparisons.
`IF` takes the rest of the line, so colons after `THEN` or `ELSE` separate
statements of that branch. A branch that is only a line number is a
`GOTO`. An `IF` may appear inside another; each `ELSE` belongs to the
nearest `IF` before it that doesn't have one yet.

## Example
```text
A = 1 : B = -1
IF A > 0 THEN IF B > 0 THEN PRINT 1 ELSE PRINT 2 ELSE PRINT 3
IF A = 1 THEN 100 ELSE 200
100 PRINT "ONE" : END
200 PRINT "NOT ONE"
```
Output:
```text
2
ONE
```

*/

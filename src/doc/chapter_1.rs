/*!
# Expressions and Types

Variables hold one of three types, chosen by the last character of the
name. Names start with a letter or underbar and continue with letters,
digits and underbars. Case does not matter.

```text
LET A = 1.5   ' Real, 64-bit floating point
LET A! = 1.5  ' Same variable as A
LET A# = 1.5  ' Same variable as A
LET A% = 5    ' Integer, signed 64-bit
LET A$ = "X"  ' String
```

`A`, `A%` and `A$` are three different variables. A variable that was
never assigned reads as zero or the empty string.

Literals with a decimal point are reals, literals without one are
integers. There is no exponent notation in literals. Strings are enclosed
in quotation marks and have no escape sequence.

## Operators

From loosest to tightest binding:

| Operators | Notes |
|-----------|-------|
| `AND` `OR` | booleans only |
| `NOT` | unary |
| `=` `<>` `<` `<=` `>` `>=` | produce a boolean |
| `+` `-` | `+` also joins strings |
| `*` `/` `\` `MOD` | |
| functions | |
| `^` | |
| unary `+` `-` | |

Operators of equal binding are applied left to right. That includes `^`,
so `2^3^2` is `64`. Parentheses group as usual.

## Conversions

Two integers give an integer, except `/` which always gives a real. `\`
and `MOD` give an integer even from reals; the operands are truncated
first. Mixing an integer with a real gives a real.

If one side is a string, the other side is turned into text and the
operation happens on strings. Only `+` and the comparisons work on
strings.

```text
PRINT "X=" + 5       ' X=5
PRINT "10" < 9       ' compares "10" with "9"
```

Booleans come from comparisons. They can be combined with `AND`, `OR` and
`NOT` and tested with `IF`, but never stored or mixed with other types.
`IF 1 THEN` is a `?TYPE MISMATCH`.

Storing a real into an integer variable truncates toward zero. Storing a
number into a string variable stores its text.

```text
A% = 7.9   ' 7
A$ = 1/3   ' 0.333333
```

Reals print with up to six significant digits and switch to exponent
form for very large or very small values.

Integer arithmetic that would wrap gives `?OVERFLOW`. Dividing by zero
with `/`, `\` or `MOD` gives `?DIVISION BY ZERO`.

*/

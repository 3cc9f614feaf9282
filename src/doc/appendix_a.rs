/*!
# Errors and Limits

Errors stop the program. The error is printed with a question mark in
front, followed by the line it happened on.

| Error | Cause |
|-------|-------|
| `BREAK` | `STOP` or CTRL-C |
| `SYNTAX ERROR` | malformed statement or expression |
| `RETURN WITHOUT GOSUB` | `RETURN` with no pending `GOSUB` |
| `ILLEGAL FUNCTION CALL` | `RND` of a negative integer |
| `OVERFLOW` | integer arithmetic out of range |
| `OUT OF MEMORY` | `GOSUB` nested too deep |
| `UNDEFINED LABEL` | jump to a label that doesn't exist |
| `DIVISION BY ZERO` | `/`, `\` or `MOD` by zero |
| `TYPE MISMATCH` | booleans mixed with other values, strings in arithmetic |
| `DUPLICATE LABEL` | two lines with the same label |
| `INPUT PAST END` | `INPUT` with no input left |

Errors found while loading, such as an invalid character, a malformed
assignment or jump, or a duplicate label, are reported before any line
runs. An unknown statement or a jump to a missing label is only reported
when that line runs.

## Limits

* Integers are signed 64-bit, reals are 64-bit floating point.
* `GOSUB` nests up to 65,536 calls.
* Strings and lines have no fixed length.

*/

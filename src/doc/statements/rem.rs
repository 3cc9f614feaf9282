/*!
# `REM <anything>` or `' <anything>`

## Purpose
Embeds non-executing remarks into the program source code.

## Remarks
Everything to the end of the line is ignored, including colons.

## Example
```text
REM Authored by Zaphod
PRINT 42 ' Answer to everything.
```

*/

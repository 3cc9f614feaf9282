/*!
# Functions

Functions take one argument. Parentheses are only needed for grouping:
`SQR 16` and `SQR(16)` are the same. A function binds tighter than
`*` but looser than `^`, so `SQR X^2` is `SQR(X^2)`.
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    An integer argument gives an integer.
    ```text
    PRINT ABS(-0.123)
    0.123
    ```
    */
}

pub mod ATN {
    /*!
    ## `ATN(X)` Returns the arctangent of X in radians.
    ```text
    PRINT ATN(3)
    1.24905
    ```
    */
}

pub mod COS {
    /*!
    ## `COS(X)` Returns the cosine of X in radians.
    ```text
    PRINT COS(0)
    1
    ```
    */
}

pub mod EXP {
    /*!
    ## `EXP(X)` Returns the binary exponent of X.
    The integer E such that X is M times 2^E with the magnitude of M
    at least 0.5 and below 1. Zero gives zero. This is not e^X.
    ```text
    PRINT EXP(8)
    4
    ```
    */
}

pub mod FIX {
    /*!
    ## `FIX(X)` Returns the largest whole number not above X.
    The result is still a real.
    ```text
    PRINT FIX(-2.5)
    -3
    ```
    */
}

pub mod INT {
    /*!
    ## `INT(X)` Returns the largest integer not above X.
    ```text
    PRINT INT(-2.5); INT(2.5)
    -3 2
    ```
    */
}

pub mod LOG {
    /*!
    ## `LOG(X)` Returns the natural logarithm of X.
    ```text
    PRINT LOG(1)
    0
    ```
    */
}

pub mod RND {
    /*!
    ## `RND(X)` Returns a random number.
    An integer argument gives an integer from 0 to X inclusive. A negative
    integer is an `ILLEGAL FUNCTION CALL`. A real argument gives a real
    from 0 up to but not including X.
    ```text
    DIE% = RND(5) + 1
    ```
    */
}

pub mod SGN {
    /*!
    ## `SGN(X)` Returns the sign of X.
    -1 for negative, 0 for zero, 1 for positive.
    ```text
    PRINT SGN(-7)
    -1
    ```
    */
}

pub mod SHELL {
    /*!
    ## `SHELL(X$)` Runs X$ as a shell command and returns its exit code.
    A command killed by a signal returns -1.
    ```text
    CODE% = SHELL("ls")
    ```
    */
}

pub mod SIN {
    /*!
    ## `SIN(X)` Returns the sine of X in radians.
    ```text
    PRINT SIN(0)
    0
    ```
    */
}

pub mod SQR {
    /*!
    ## `SQR(X)` Returns the square root of X.
    ```text
    PRINT SQR(16)
    4
    ```
    */
}

pub mod TAN {
    /*!
    ## `TAN(X)` Returns the tangent of X in radians.
    ```text
    PRINT TAN(0)
    0
    ```
    */
}

pub mod VAL {
    /*!
    ## `VAL(X$)` Returns the number at the start of X$.
    Leading blanks are skipped. Anything after the number is ignored and
    a string without a number gives 0.
    ```text
    PRINT VAL(" 12.5 METERS")
    12.5
    ```
    */
}

/*!
# Shell Commands

These commands work with the host system or do quick arithmetic.
They can be used in direct mode and in programs.
*/

pub mod LOAD {
    /*!
    ## `LOAD "<command>" ["<argument>"]...` Runs an external program.
    The strings are split on spaces. A word that is exactly `~`, or that
    starts with `~/`, has the `~` replaced by your home directory. Any
    other `~` is passed unchanged. CBSH waits for the program to finish.
    ```text
    LOAD "ls -l" "~"
    ```
    A program that cannot be found reports `FILE NOT FOUND`.
    */
}

pub mod DIR {
    /*!
    ## `DIR` Prints the names in the current directory, one per line.
    */
}

pub mod SET {
    /*!
    ## `SET emu_amiga_m68k = TRUE|FALSE` Changes a shell setting.
    ```text
    SET emu_amiga_m68k = TRUE
    emu_amiga_m68k set to TRUE
    ```
    */
}

pub mod ADD {
    /*!
    ## `ADD X Y` Prints the sum with two decimals.
    ```text
    ADD 2 -0.5
    Result: 1.50
    ```
    */
}

pub mod SUB {
    /*!
    ## `SUB X Y` Prints X minus Y with two decimals.
    */
}

pub mod DIV {
    /*!
    ## `DIV X Y` Prints X divided by Y with two decimals.
    Dividing by zero reports `DIVISION BY ZERO`.
    */
}

pub mod FLOOR {
    /*!
    ## `FLOOR X` Prints the largest whole number not above X.
    ```text
    FLOOR -2.5
    Result: -3
    ```
    */
}

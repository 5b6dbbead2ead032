/*!
# Introductory Tutorial for the Keypad Calculator

Begin by opening a terminal and running the executable. You will see the
keypad, an empty expression line, and a result line showing `0`.
Type CTRL-D to exit.
<pre><code>&nbsp;  [ AC  ] [ DEL ] [  %  ] [  ÷  ]
&nbsp;  [  7  ] [  8  ] [  9  ] [  ×  ]
&nbsp;  [  4  ] [  5  ] [  6  ] [  −  ]
&nbsp;  [  1  ] [  2  ] [  3  ] [  +  ]
&nbsp;  [  0  ] [  .  ] [  =  ]
&nbsp;
&nbsp;  0
&nbsp;> █
</code></pre>

Each button is pressed by typing its label. Digits, the decimal point,
the operators and `=` are one character each, so they may be run
together. Spaces and commas are ignored. I'll mark lines that you type
with a "`>`".

<pre><code>&nbsp;> 12+30
&nbsp;  12 +
&nbsp;  30
&nbsp;> =
&nbsp;
&nbsp;  42
</code></pre>

The upper line holds the stored operand and the pending operator. The
lower line is the number being typed or the last result. Pressing an
operator while another is pending finishes the pending one first.

<pre><code>&nbsp;> ac 5+3+
&nbsp;  8 +
&nbsp;  0
&nbsp;> 2=
&nbsp;
&nbsp;  10
</code></pre>

Multiplication may be typed as `*`, `x` or `×`. Division as `/` or `÷`.
The word buttons are `AC` (also `C` or `CLEAR`), `DEL` (also `BS` or
`DELETE`). Percent is `%` and divides the current number by 100.

Results are rounded to 12 significant digits, so `0.1+0.2=` shows `0.3`.
Dividing by zero shows `Error` along with the cause. Typing a digit
starts over with a new number. Operators, `=` and `%` are ignored until
then.

<pre><code>&nbsp;> 7/0=
&nbsp;
&nbsp;  Error
&nbsp;  ?DIVISION BY ZERO
&nbsp;> +
&nbsp;
&nbsp;  Error
&nbsp;  ?DIVISION BY ZERO
&nbsp;> 9
&nbsp;
&nbsp;  9
</code></pre>

A line containing anything that is not a button is rejected whole and
nothing on it is pressed.

<pre><code>&nbsp;> 2 sqrt
&nbsp;  ?SYNTAX ERROR IN (2..6); UNKNOWN BUTTON
</code></pre>

CTRL-C clears the calculator the same as `AC`.

For scripts, `calc --keys "5+3="` presses the buttons, prints the
display, and exits. Add `--trace` to see the display after every
button.
*/

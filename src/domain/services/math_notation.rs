#[cfg(test)]
#[path = "math_notation_test.rs"]
mod tests;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Captures;
use regex::Regex;

static SUPERSCRIPTS: Lazy<HashMap<char, char>> = Lazy::new(|| {
    return HashMap::from([
        ('0', '⁰'),
        ('1', '¹'),
        ('2', '²'),
        ('3', '³'),
        ('4', '⁴'),
        ('5', '⁵'),
        ('6', '⁶'),
        ('7', '⁷'),
        ('8', '⁸'),
        ('9', '⁹'),
        ('a', 'ᵃ'),
        ('b', 'ᵇ'),
        ('c', 'ᶜ'),
        ('d', 'ᵈ'),
        ('e', 'ᵉ'),
        ('f', 'ᶠ'),
        ('g', 'ᵍ'),
        ('h', 'ʰ'),
        ('i', 'ⁱ'),
        ('j', 'ʲ'),
        ('k', 'ᵏ'),
        ('l', 'ˡ'),
        ('m', 'ᵐ'),
        ('n', 'ⁿ'),
        ('o', 'ᵒ'),
        ('p', 'ᵖ'),
        ('q', 'ᵍ'),
        ('r', 'ʳ'),
        ('s', 'ˢ'),
        ('t', 'ᵗ'),
        ('u', 'ᵘ'),
        ('v', 'ᵛ'),
        ('w', 'ʷ'),
        ('x', 'ˣ'),
        ('y', 'ʸ'),
        ('z', 'ᶻ'),
        ('A', 'ᴬ'),
        ('B', 'ᴮ'),
        ('C', 'ᶜ'),
        ('D', 'ᴰ'),
        ('E', 'ᴱ'),
        ('F', 'ᶠ'),
        ('G', 'ᴳ'),
        ('H', 'ᴴ'),
        ('I', 'ᴵ'),
        ('J', 'ᴶ'),
        ('K', 'ᴷ'),
        ('L', 'ᴸ'),
        ('M', 'ᴹ'),
        ('N', 'ᴺ'),
        ('O', 'ᴼ'),
        ('P', 'ᴾ'),
        ('Q', 'ᵠ'),
        ('R', 'ᴿ'),
        ('S', 'ˢ'),
        ('T', 'ᵀ'),
        ('U', 'ᵁ'),
        ('V', 'ᵛ'),
        ('W', 'ʷ'),
        ('X', 'ˣ'),
        ('Y', 'ʸ'),
        ('Z', 'ᶻ'),
        ('+', '⁺'),
        ('-', '⁻'),
        ('=', '⁼'),
        ('(', '⁽'),
        (')', '⁾'),
    ]);
});

static SUBSCRIPTS: Lazy<HashMap<char, char>> = Lazy::new(|| {
    return HashMap::from([
        ('0', '₀'),
        ('1', '₁'),
        ('2', '₂'),
        ('3', '₃'),
        ('4', '₄'),
        ('5', '₅'),
        ('6', '₆'),
        ('7', '₇'),
        ('8', '₈'),
        ('9', '₉'),
        ('a', 'ₐ'),
        ('b', 'ᵦ'),
        ('c', 'ᶜ'),
        ('d', 'ᵨ'),
        ('e', 'ₑ'),
        ('f', 'ᶠ'),
        ('g', 'ᵍ'),
        ('h', 'ₕ'),
        ('i', 'ᵢ'),
        ('j', 'ⱼ'),
        ('k', 'ₖ'),
        ('l', 'ₗ'),
        ('m', 'ₘ'),
        ('n', 'ₙ'),
        ('o', 'ₒ'),
        ('p', 'ₚ'),
        ('q', 'ᵩ'),
        ('r', 'ᵣ'),
        ('s', 'ₛ'),
        ('t', 'ₜ'),
        ('u', 'ᵤ'),
        ('v', 'ᵥ'),
        ('w', 'ₓ'),
        ('x', 'ₓ'),
        ('y', 'ᵧ'),
        ('z', 'ᵤ'),
        ('+', '₊'),
        ('-', '₋'),
        ('=', '₌'),
        ('(', '₍'),
        (')', '₎'),
    ]);
});

// Named-symbol substitutions, applied in order. Every pattern starts at a
// backslash, so a command can only shadow another that it prefixes; the
// `eq`-suffixed set commands run first for that reason.
static SYMBOLS: [(&str, &str); 75] = [
    // Operators.
    (r"\\times", "×"),
    (r"\\div", "÷"),
    (r"\\cdot", "·"),
    (r"\\ast", "*"),
    // Comparison.
    (r"\\approx", "≈"),
    (r"\\neq", "≠"),
    (r"\\leq", "≤"),
    (r"\\geq", "≥"),
    (r"\\equiv", "≡"),
    // Special symbols.
    (r"\\infty", "∞"),
    (r"\\partial", "∂"),
    (r"\\nabla", "∇"),
    (r"\\emptyset", "∅"),
    (r"\\forall", "∀"),
    (r"\\exists", "∃"),
    // Calculus.
    (r"\\sum", "∑"),
    (r"\\prod", "∏"),
    (r"\\int", "∫"),
    (r"\\iint", "∬"),
    (r"\\iiint", "∭"),
    (r"\\oint", "∮"),
    // Greek, uppercase.
    (r"\\Delta", "Δ"),
    (r"\\Sigma", "Σ"),
    (r"\\Pi", "Π"),
    (r"\\Omega", "Ω"),
    (r"\\Lambda", "Λ"),
    (r"\\Gamma", "Γ"),
    (r"\\Theta", "Θ"),
    // Greek, lowercase.
    (r"\\pi", "π"),
    (r"\\alpha", "α"),
    (r"\\beta", "β"),
    (r"\\gamma", "γ"),
    (r"\\delta", "δ"),
    (r"\\epsilon", "ε"),
    (r"\\zeta", "ζ"),
    (r"\\eta", "η"),
    (r"\\theta", "θ"),
    (r"\\iota", "ι"),
    (r"\\kappa", "κ"),
    (r"\\lambda", "λ"),
    (r"\\mu", "μ"),
    (r"\\nu", "ν"),
    (r"\\xi", "ξ"),
    (r"\\omicron", "ο"),
    (r"\\rho", "ρ"),
    (r"\\sigma", "σ"),
    (r"\\tau", "τ"),
    (r"\\upsilon", "υ"),
    (r"\\phi", "φ"),
    (r"\\chi", "χ"),
    (r"\\psi", "ψ"),
    (r"\\omega", "ω"),
    // Arrows.
    (r"\\rightarrow", "→"),
    (r"\\leftarrow", "←"),
    (r"\\leftrightarrow", "↔"),
    (r"\\Rightarrow", "⇒"),
    (r"\\Leftarrow", "⇐"),
    (r"\\uparrow", "↑"),
    (r"\\downarrow", "↓"),
    // Set theory.
    (r"\\in", "∈"),
    (r"\\notin", "∉"),
    (r"\\subseteq", "⊆"),
    (r"\\supseteq", "⊇"),
    (r"\\subset", "⊂"),
    (r"\\supset", "⊃"),
    (r"\\cup", "∪"),
    (r"\\cap", "∩"),
    (r"\\mathbb\{N\}", "ℕ"),
    (r"\\mathbb\{Z\}", "ℤ"),
    (r"\\mathbb\{Q\}", "ℚ"),
    (r"\\mathbb\{R\}", "ℝ"),
    (r"\\mathbb\{C\}", "ℂ"),
    // Logic.
    (r"\\land", "∧"),
    (r"\\lor", "∨"),
    (r"\\neg", "¬"),
];

static SYMBOL_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    return SYMBOLS
        .iter()
        .map(|(pattern, replacement)| {
            return (Regex::new(pattern).unwrap(), *replacement);
        })
        .collect();
});

static MATH_DELIMITERS: Lazy<Regex> = Lazy::new(|| return Regex::new(r"\$\$?").unwrap());
static FRACTION: Lazy<Regex> =
    Lazy::new(|| return Regex::new(r"\\frac\{([^}]+)\}\{([^}]+)\}").unwrap());
static SQUARE_ROOT: Lazy<Regex> = Lazy::new(|| return Regex::new(r"\\sqrt\{([^}]+)\}").unwrap());
// Word bounded so `\leftarrow` and friends reach the arrow table intact.
static LAYOUT_MACROS: Lazy<Regex> = Lazy::new(|| {
    return Regex::new(r"\\(?:left|right|Bigg|bigg|Big|big|displaystyle|textstyle)\b\s*").unwrap();
});
static SUPERSCRIPT_GROUP: Lazy<Regex> =
    Lazy::new(|| return Regex::new(r"([a-zA-Z0-9])\^\{([^}]+)\}").unwrap());
static SUPERSCRIPT_CHAR: Lazy<Regex> =
    Lazy::new(|| return Regex::new(r"([a-zA-Z0-9])\^([a-zA-Z0-9])").unwrap());
static SUBSCRIPT_GROUP: Lazy<Regex> =
    Lazy::new(|| return Regex::new(r"([a-zA-Z0-9])_\{([^}]+)\}").unwrap());
static SUBSCRIPT_CHAR: Lazy<Regex> =
    Lazy::new(|| return Regex::new(r"([a-zA-Z0-9])_([a-zA-Z0-9])").unwrap());

fn map_script(caps: &Captures, table: &HashMap<char, char>) -> String {
    let mapped = caps[2]
        .chars()
        .map(|c| return *table.get(&c).unwrap_or(&c))
        .collect::<String>();
    return format!("{}{mapped}", &caps[1]);
}

/// Rewrites LaTeX-style math markup in to plain Unicode so answers read
/// naturally in a terminal. Substitutions run in a fixed order and later
/// rules act on the output of earlier ones, so the order is part of the
/// contract. Unrecognized macros are left verbatim, and `\frac` only
/// supports non-nested arguments.
pub fn clean_math_notation(text: &str) -> String {
    let mut res = MATH_DELIMITERS.replace_all(text, "").into_owned();

    res = FRACTION.replace_all(&res, "${1}/${2}").into_owned();
    res = SQUARE_ROOT.replace_all(&res, "sqrt(${1})").into_owned();
    res = LAYOUT_MACROS.replace_all(&res, "").into_owned();

    res = SUPERSCRIPT_GROUP
        .replace_all(&res, |caps: &Captures| {
            return map_script(caps, &SUPERSCRIPTS);
        })
        .into_owned();
    res = SUPERSCRIPT_CHAR
        .replace_all(&res, |caps: &Captures| {
            return map_script(caps, &SUPERSCRIPTS);
        })
        .into_owned();
    res = SUBSCRIPT_GROUP
        .replace_all(&res, |caps: &Captures| {
            return map_script(caps, &SUBSCRIPTS);
        })
        .into_owned();
    res = SUBSCRIPT_CHAR
        .replace_all(&res, |caps: &Captures| {
            return map_script(caps, &SUBSCRIPTS);
        })
        .into_owned();

    for (pattern, replacement) in SYMBOL_RULES.iter() {
        res = pattern.replace_all(&res, *replacement).into_owned();
    }

    return res;
}

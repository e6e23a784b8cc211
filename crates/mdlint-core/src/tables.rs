//! Static dictionaries used by the rule engine: preferred spellings,
//! fenced-code language aliases, forbidden HTML tag fragments, and the
//! Russian polite-pronoun list. Loaded once, immutable, shared across
//! every check call.

/// Incorrect spelling -> preferred spelling (H006).
pub const INCORRECT_WORDS: &[(&str, &str)] = &[
    ("Latex", "LaTeX"),
    ("latex", "LaTeX"),
    ("e-mail", "email"),
    ("cms", "CMS"),
    ("СЬS", "CMS"),
    ("СMS", "CMS"),
    ("СМS", "CMS"),
    ("сms", "CMS"),
    ("смs", "CMS"),
    ("СМС", "CMS"),
    ("смс", "CMS"),
    ("css", "CSS"),
    ("html", "HTML"),
    ("pdf", "PDF"),
    ("php", "PHP"),
    ("svg", "SVG"),
    ("xml", "XML"),
    ("odf", "ODF"),
    ("odt", "ODT"),
    ("dll", "DLL"),
    ("Dll", "DLL"),
    ("exe", "EXE"),
    ("qml", "QML"),
    ("web документ", "веб-документ"),
    ("Web документ", "веб-документ"),
    ("WEB документ", "веб-документ"),
    ("web приложение", "веб-приложение"),
    ("Web приложение", "веб-приложение"),
    ("WEB приложение", "веб-приложение"),
    ("web приложения", "веб-приложения"),
    ("Web приложения", "веб-приложения"),
    ("WEB приложения", "веб-приложения"),
    ("c++", "C++"),
    ("с++", "C++"),
    ("С++", "C++"),
    ("с#", "C#"),
    ("С#", "C#"),
    ("сpp", "cpp"),
    ("срр", "cpp"),
    ("pascal", "Pascal"),
    ("c++11", "C++11"),
    ("с++11", "C++11"),
    ("С++11", "C++11"),
    ("c++17", "C++17"),
    ("с++17", "C++17"),
    ("С++17", "C++17"),
    ("c++20", "C++20"),
    ("с++20", "C++20"),
    ("С++20", "C++20"),
    ("ok", "OK"),
    ("Ok", "OK"),
    ("ОК", "OK"),
    ("ок", "OK"),
    ("id", "ID"),
    ("Id", "ID"),
    ("javaScript", "JavaScript"),
    ("Javascript", "JavaScript"),
    ("javascript", "JavaScript"),
    ("Php", "PHP"),
    ("Йе", "Qt"),
    ("йе", "Qt"),
    ("qt", "Qt"),
    ("android", "Android"),
    ("java", "Java"),
    ("apk", "APK"),
    ("markdon", "Markdown"),
    ("markdown", "Markdown"),
    ("Github", "GitHub"),
    ("github", "GitHub"),
    ("git", "Git"),
    ("т.е.", "т. е."),
    ("Т.е.", "Т. е."),
    ("т.д.", "т. д."),
    ("т.ч.", "т. ч."),
    ("т.п.", "т. п."),
];

/// Incorrect fenced-code language id -> preferred id (H007).
pub const INCORRECT_LANGUAGES: &[(&str, &str)] = &[("console", "shell"), ("py", "python")];

/// Forbidden HTML tag fragments (H019), matched case-insensitively.
pub const FORBIDDEN_HTML_TAGS: &[&str] = &[
    "<pre class",
    "<table",
    "<strong",
    "<b>",
    "<b ",
    "<a>",
    "<a ",
    "<i>",
    "<i ",
    "<p>",
    "<p ",
    "<h1",
    "<h2",
    "<h3",
    "<h4",
    "<h5",
    "<h6",
    "</",
];

/// Capitalized Russian polite "you" pronouns (H024), flagged mid-sentence
/// when `lang == "ru"`.
pub const RUSSIAN_POLITE_PRONOUNS_CAPITALIZED: &[&str] = &[
    "Вы", "Вас", "Вам", "Вами", "Ваш", "Вашего", "Ваше", "Вашу", "Вашей", "Ваша", "Вашему",
    "Вашим", "Вашем", "Вашею", "Ваши", "Ваших", "Вашими",
];

/// Old-style docstring section headings (HP002).
pub const DOCSTRING_SECTION_HEADINGS: &[&str] = &[
    "Args:",
    "Returns:",
    "Yields:",
    "Raises:",
    "Attributes:",
    "Note:",
    "Notes:",
    "Example:",
    "Examples:",
];

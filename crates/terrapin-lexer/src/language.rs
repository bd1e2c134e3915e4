//! Per-language keyword translation tables.
//!
//! Each table maps localized command spellings (matched case-insensitively)
//! to the locale-independent canonical names in
//! [`terrapin_types::BUILTIN_COMMANDS`]. The tables are compiled in; every
//! language covers the full command surface.

/// A keyword translation table for one language.
#[derive(Debug)]
pub struct Language {
    pub name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl Language {
    /// Look up a language by identifier, case-insensitively.
    pub fn lookup(id: &str) -> Option<&'static Language> {
        ALL.iter()
            .copied()
            .find(|lang| lang.name.eq_ignore_ascii_case(id))
    }

    /// The language for `id`, falling back to English for unknown ids.
    pub fn named(id: &str) -> &'static Language {
        Self::lookup(id).unwrap_or(&ENGLISH)
    }

    /// Translate a localized spelling to its canonical command name.
    pub fn translate(&self, word: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(word))
            .map(|&(_, canonical)| canonical)
    }
}

/// All built-in languages.
pub static ALL: &[&Language] = &[&ENGLISH, &SPANISH, &CHINESE];

pub static ENGLISH: Language = Language {
    name: "English",
    entries: &[
        ("forward", "Forward"),
        ("fd", "Forward"),
        ("backward", "Backward"),
        ("back", "Backward"),
        ("bk", "Backward"),
        ("left", "Left"),
        ("lt", "Left"),
        ("right", "Right"),
        ("rt", "Right"),
        ("setheading", "SetHeading"),
        ("seth", "SetHeading"),
        ("setxy", "SetPosition"),
        ("setposition", "SetPosition"),
        ("home", "Home"),
        ("clearscreen", "ClearScreen"),
        ("cs", "ClearScreen"),
        ("penup", "PenUp"),
        ("pu", "PenUp"),
        ("pendown", "PenDown"),
        ("pd", "PenDown"),
        ("showturtle", "ShowTurtle"),
        ("st", "ShowTurtle"),
        ("hideturtle", "HideTurtle"),
        ("ht", "HideTurtle"),
        ("xcor", "XCoordinate"),
        ("ycor", "YCoordinate"),
        ("heading", "Heading"),
        ("pendown?", "IsPenDown"),
        ("pendownp", "IsPenDown"),
        ("showing?", "IsShowing"),
        ("showingp", "IsShowing"),
        ("id", "ID"),
        ("sum", "Sum"),
        ("difference", "Difference"),
        ("product", "Product"),
        ("quotient", "Quotient"),
        ("remainder", "Remainder"),
        ("power", "Power"),
        ("pow", "Power"),
        ("minus", "Minus"),
        ("sqrt", "SquareRoot"),
        ("squareroot", "SquareRoot"),
        ("sin", "Sine"),
        ("sine", "Sine"),
        ("cos", "Cosine"),
        ("cosine", "Cosine"),
        ("tan", "Tangent"),
        ("tangent", "Tangent"),
        ("atan", "ArcTangent"),
        ("arctan", "ArcTangent"),
        ("log", "NaturalLog"),
        ("ln", "NaturalLog"),
        ("random", "Random"),
        ("pi", "Pi"),
        ("less?", "LessThan"),
        ("lessp", "LessThan"),
        ("greater?", "GreaterThan"),
        ("greaterp", "GreaterThan"),
        ("equal?", "Equal"),
        ("equalp", "Equal"),
        ("notequal?", "NotEqual"),
        ("notequalp", "NotEqual"),
        ("and", "And"),
        ("or", "Or"),
        ("not", "Not"),
        ("make", "Make"),
        ("set", "Make"),
        ("repeat", "Repeat"),
        ("dotimes", "DoTimes"),
        ("if", "If"),
        ("ifelse", "IfElse"),
        ("tell", "Tell"),
        ("ask", "Ask"),
        ("askwith", "AskWith"),
        ("to", "MakeUserInstruction"),
    ],
};

pub static SPANISH: Language = Language {
    name: "Spanish",
    entries: &[
        ("avanza", "Forward"),
        ("ava", "Forward"),
        ("retrocede", "Backward"),
        ("re", "Backward"),
        ("izquierda", "Left"),
        ("iz", "Left"),
        ("derecha", "Right"),
        ("de", "Right"),
        ("ponrumbo", "SetHeading"),
        ("ponxy", "SetPosition"),
        ("ponpos", "SetPosition"),
        ("centro", "Home"),
        ("borrapantalla", "ClearScreen"),
        ("bp", "ClearScreen"),
        ("subelapiz", "PenUp"),
        ("sl", "PenUp"),
        ("bajalapiz", "PenDown"),
        ("bl", "PenDown"),
        ("muestratortuga", "ShowTurtle"),
        ("mt", "ShowTurtle"),
        ("ocultatortuga", "HideTurtle"),
        ("ot", "HideTurtle"),
        ("corx", "XCoordinate"),
        ("cory", "YCoordinate"),
        ("rumbo", "Heading"),
        ("lapizbajo?", "IsPenDown"),
        ("visible?", "IsShowing"),
        ("id", "ID"),
        ("suma", "Sum"),
        ("diferencia", "Difference"),
        ("producto", "Product"),
        ("cociente", "Quotient"),
        ("resto", "Remainder"),
        ("potencia", "Power"),
        ("menos", "Minus"),
        ("raiz", "SquareRoot"),
        ("raizcuadrada", "SquareRoot"),
        ("seno", "Sine"),
        ("coseno", "Cosine"),
        ("tangente", "Tangent"),
        ("arcotangente", "ArcTangent"),
        ("logaritmo", "NaturalLog"),
        ("azar", "Random"),
        ("aleatorio", "Random"),
        ("pi", "Pi"),
        ("menor?", "LessThan"),
        ("mayor?", "GreaterThan"),
        ("igual?", "Equal"),
        ("noigual?", "NotEqual"),
        ("y", "And"),
        ("o", "Or"),
        ("no", "Not"),
        ("haz", "Make"),
        ("repite", "Repeat"),
        ("hazveces", "DoTimes"),
        ("si", "If"),
        ("sisino", "IfElse"),
        ("dile", "Tell"),
        ("pregunta", "Ask"),
        ("preguntacon", "AskWith"),
        ("para", "MakeUserInstruction"),
    ],
};

pub static CHINESE: Language = Language {
    name: "Chinese",
    entries: &[
        ("qianjin", "Forward"),
        ("qj", "Forward"),
        ("houtui", "Backward"),
        ("ht", "Backward"),
        ("zuozhuan", "Left"),
        ("zz", "Left"),
        ("youzhuan", "Right"),
        ("yz", "Right"),
        ("shefangxiang", "SetHeading"),
        ("shezuobiao", "SetPosition"),
        ("huijia", "Home"),
        ("qingping", "ClearScreen"),
        ("tibi", "PenUp"),
        ("luobi", "PenDown"),
        ("xianshi", "ShowTurtle"),
        ("yincang", "HideTurtle"),
        ("hengzuobiao", "XCoordinate"),
        ("zongzuobiao", "YCoordinate"),
        ("fangxiang", "Heading"),
        ("luobi?", "IsPenDown"),
        ("xianshi?", "IsShowing"),
        ("bianhao", "ID"),
        ("jia", "Sum"),
        ("jian", "Difference"),
        ("cheng", "Product"),
        ("chu", "Quotient"),
        ("yushu", "Remainder"),
        ("mi", "Power"),
        ("fushu", "Minus"),
        ("pingfanggen", "SquareRoot"),
        ("zhengxian", "Sine"),
        ("yuxian", "Cosine"),
        ("zhengqie", "Tangent"),
        ("fanzhengqie", "ArcTangent"),
        ("duishu", "NaturalLog"),
        ("suiji", "Random"),
        ("pi", "Pi"),
        ("xiaoyu?", "LessThan"),
        ("dayu?", "GreaterThan"),
        ("dengyu?", "Equal"),
        ("budengyu?", "NotEqual"),
        ("yu", "And"),
        ("huo", "Or"),
        ("fei", "Not"),
        ("zhiding", "Make"),
        ("chongfu", "Repeat"),
        ("cf", "Repeat"),
        ("jishu", "DoTimes"),
        ("ruguo", "If"),
        ("ruguofouze", "IfElse"),
        ("gaosu", "Tell"),
        ("xunwen", "Ask"),
        ("tiaojianxunwen", "AskWith"),
        ("dingyi", "MakeUserInstruction"),
    ],
};

//! Frequently used string and character constants.

pub mod string_pool {
    pub const AMPERSAND: &str = "&";
    pub const AND: &str = "and";
    pub const AT: &str = "@";
    pub const ASTERISK: &str = "*";
    pub const STAR: &str = ASTERISK;
    pub const BACK_SLASH: &str = "\\";
    pub const COLON: &str = ":";
    pub const COMMA: &str = ",";
    pub const DASH: &str = "-";
    pub const DOLLAR: &str = "$";
    pub const DOT: &str = ".";
    pub const EMPTY: &str = "";
    pub const EQUALS: &str = "=";
    pub const FALSE: &str = "false";
    pub const SLASH: &str = "/";
    pub const HASH: &str = "#";
    pub const HAT: &str = "^";
    pub const LEFT_BRACE: &str = "{";
    pub const LEFT_BRACKET: &str = "(";
    pub const LEFT_CHEV: &str = "<";
    pub const NEWLINE: &str = "\n";
    pub const N: &str = "n";
    pub const NO: &str = "no";
    pub const NULL: &str = "null";
    pub const OFF: &str = "off";
    pub const ON: &str = "on";
    pub const PERCENT: &str = "%";
    pub const PIPE: &str = "|";
    pub const PLUS: &str = "+";
    pub const QUESTION_MARK: &str = "?";
    pub const EXCLAMATION_MARK: &str = "!";
    pub const QUOTE: &str = "\"";
    pub const RETURN: &str = "\r";
    pub const TAB: &str = "\t";
    pub const RIGHT_BRACE: &str = "}";
    pub const RIGHT_BRACKET: &str = ")";
    pub const RIGHT_CHEV: &str = ">";
    pub const SEMICOLON: &str = ";";
    pub const SINGLE_QUOTE: &str = "'";
    pub const BACKTICK: &str = "`";
    pub const SPACE: &str = " ";
    pub const TILDA: &str = "~";
    pub const LEFT_SQ_BRACKET: &str = "[";
    pub const RIGHT_SQ_BRACKET: &str = "]";
    pub const TRUE: &str = "true";
    pub const UNDERSCORE: &str = "_";
    pub const UTF_8: &str = "UTF-8";
    pub const GBK: &str = "GBK";
    pub const Y: &str = "y";
    pub const YES: &str = "yes";
    pub const ONE: &str = "1";
    pub const ZERO: &str = "0";
    pub const DOLLAR_LEFT_BRACE: &str = "${";
    pub const GET: &str = "get";
    pub const IS: &str = "is";
    pub const UNKNOWN: &str = "unknown";
    pub const OK: &str = "ok";
}

pub mod char_pool {
    pub const UPPER_A: char = 'A';
    pub const LOWER_A: char = 'a';
    pub const UPPER_Z: char = 'Z';
    pub const LOWER_Z: char = 'z';
    pub const DOT: char = '.';
    pub const AT: char = '@';
    pub const LEFT_BRACE: char = '{';
    pub const RIGHT_BRACE: char = '}';
    pub const LEFT_BRACKET: char = '(';
    pub const RIGHT_BRACKET: char = ')';
    pub const DASH: char = '-';
    pub const PERCENT: char = '%';
    pub const PIPE: char = '|';
    pub const PLUS: char = '+';
    pub const QUESTION_MARK: char = '?';
    pub const EXCLAMATION_MARK: char = '!';
    pub const EQUALS: char = '=';
    pub const AMPERSAND: char = '&';
    pub const ASTERISK: char = '*';
    pub const STAR: char = ASTERISK;
    pub const BACK_SLASH: char = '\\';
    pub const COLON: char = ':';
    pub const COMMA: char = ',';
    pub const DOLLAR: char = '$';
    pub const SLASH: char = '/';
    pub const HASH: char = '#';
    pub const HAT: char = '^';
    pub const LEFT_CHEV: char = '<';
    pub const NEWLINE: char = '\n';
    pub const N: char = 'n';
    pub const Y: char = 'y';
    pub const QUOTE: char = '"';
    pub const RETURN: char = '\r';
    pub const TAB: char = '\t';
    pub const RIGHT_CHEV: char = '>';
    pub const SEMICOLON: char = ';';
    pub const SINGLE_QUOTE: char = '\'';
    pub const BACKTICK: char = '`';
    pub const SPACE: char = ' ';
    pub const TILDA: char = '~';
    pub const LEFT_SQ_BRACKET: char = '[';
    pub const RIGHT_SQ_BRACKET: char = ']';
    pub const UNDERSCORE: char = '_';
    pub const ONE: char = '1';
    pub const ZERO: char = '0';
}

#[cfg(test)]
mod tests {
    use super::{char_pool, string_pool};

    #[test]
    fn aliases_match() {
        assert_eq!(string_pool::STAR, string_pool::ASTERISK);
        assert_eq!(char_pool::STAR, char_pool::ASTERISK);
    }

    #[test]
    fn string_and_char_pools_agree() {
        assert_eq!(string_pool::DASH, char_pool::DASH.to_string());
        assert_eq!(string_pool::COMMA, char_pool::COMMA.to_string());
        assert_eq!(string_pool::QUOTE, char_pool::QUOTE.to_string());
        assert_eq!(string_pool::BACK_SLASH, char_pool::BACK_SLASH.to_string());
    }
}

/// A cursor over the whitespace separated words of one command line.
///
/// The dispatcher takes the command name and the first argument off the
/// front of the line, then hands the same cursor to the command, which
/// keeps reading from where the dispatcher stopped.
#[derive(Debug, Clone)]
pub struct TokenLine<'l> {
    rest: &'l str,
}

impl<'l> TokenLine<'l> {
    pub fn new(line: &'l str) -> TokenLine<'l> {
        TokenLine { rest: line }
    }

    /// Returns the next word, or `None` once only whitespace is left.
    pub fn next_token(&mut self) -> Option<&'l str> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }

        let end = trimmed
            .find(char::is_whitespace)
            .unwrap_or_else(|| trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(token)
    }

    /// Whatever has not been consumed yet, untrimmed.
    pub fn rest(&self) -> &'l str {
        self.rest
    }
}

impl<'l> Iterator for TokenLine<'l> {
    type Item = &'l str;

    fn next(&mut self) -> Option<&'l str> {
        self.next_token()
    }
}

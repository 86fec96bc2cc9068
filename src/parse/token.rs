// ABOUTME: Parser for `swarm join-token <role> -q` output.
// ABOUTME: Blank output means the node holds no token for that role.

/// Strip trailing whitespace and newlines from a join token. The token is
/// opaque otherwise. Blank output means no token, never an empty string.
pub fn parse_token(text: &str) -> Option<String> {
    let token = text.trim_end();
    (!token.is_empty()).then(|| token.to_string())
}

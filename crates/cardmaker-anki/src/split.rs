/// Largest field Anki accepts on import, in characters
pub const FIELD_LIMIT: usize = 131071;

/// Cut `text` into consecutive chunks of at most `limit` characters.
///
/// Cuts fall wherever the limit is reached, mid-word or mid-tag. Empty text
/// gives no chunks.
pub fn split_field(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut count = 0;

    for c in text.chars() {
        if count == limit {
            chunks.push(std::mem::take(&mut chunk));
            count = 0;
        }
        chunk.push(c);
        count += 1;
    }

    if !chunk.is_empty() {
        chunks.push(chunk);
    }

    chunks
}

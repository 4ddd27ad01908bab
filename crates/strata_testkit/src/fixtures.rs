//! Test fixtures and chunk list helpers.

use strata_core::{ChunkList, Config, Item, LineBuilder, Record, Snapshot};

/// A builder that stores the input bytes as text, unchanged.
pub fn verbatim(data: &[u8]) -> Option<String> {
    Some(String::from_utf8_lossy(data).into_owned())
}

/// Creates a list of verbatim strings with the given chunk size.
pub fn verbatim_list(chunk_size: usize) -> ChunkList<String> {
    ChunkList::with_config(verbatim, Config::new().chunk_size(chunk_size))
        .expect("Invalid chunk size")
}

/// A chunk list of line items, as the CLI builds it.
pub type TestList = ChunkList<Item>;

/// Creates a [`TestList`] built by a default [`LineBuilder`].
pub fn line_list(config: Config) -> TestList {
    ChunkList::with_config(LineBuilder::new(), config).expect("Invalid config")
}

/// Pushes every input, returning how many the builder accepted.
pub fn push_all<T, I, S>(list: &ChunkList<T>, inputs: I) -> usize
where
    T: Record + 'static,
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    inputs
        .into_iter()
        .filter(|input| list.push(input.as_ref()))
        .count()
}

/// Returns the text of every record in a snapshot, in push order.
pub fn snapshot_texts<T: Record>(snapshot: &Snapshot<T>) -> Vec<String> {
    snapshot.iter().map(|item| item.text().into_owned()).collect()
}

/// Returns the text of every record in a snapshot, sorted.
pub fn sorted_texts<T: Record>(snapshot: &Snapshot<T>) -> Vec<String> {
    let mut texts = snapshot_texts(snapshot);
    texts.sort_unstable();
    texts
}

/// Checks that every chunk but the last is full.
pub fn chunks_are_packed<T>(snapshot: &Snapshot<T>) -> bool {
    let chunks = snapshot.chunks();
    chunks
        .iter()
        .take(chunks.len().saturating_sub(1))
        .all(|chunk| chunk.is_full())
}

/// Sample log lines with IPs, paths, numbers, hashes and words.
pub const SAMPLE_LOG: &[&str] = &[
    "2024-03-01T10:15:02Z sshd[40211]: Accepted publickey for deploy from 10.1.2.3 port 52144",
    "2024-03-01T10:15:09Z nginx: GET /var/www/html/index.html 200 from 192.168.0.7",
    "2024-03-01T10:16:44Z deploy: checked out 9fceb02d0ae598e95dc970b74767f19372d61af8",
    "2024-03-01T10:17:01Z cron[40233]: (root) CMD (/usr/local/bin/backup.sh)",
    "2024-03-01T10:17:59Z kernel: eth0 link up, peer fe80::1",
    "2024-03-01T10:18:30Z nginx: GET /var/www/html/index.html 304 from 10.1.2.3",
];

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::TokenKind;

    #[test]
    fn verbatim_list_round_trips_text() {
        let list = verbatim_list(2);
        assert_eq!(push_all(&list, ["a", "b", "c"]), 3);
        assert_eq!(snapshot_texts(&list.snapshot()), ["a", "b", "c"]);
        assert!(chunks_are_packed(&list.snapshot()));
    }

    #[test]
    fn line_list_strips_newlines() {
        let list = line_list(Config::new().chunk_size(4));
        push_all(&list, ["one\n", "two\r\n"]);
        assert_eq!(snapshot_texts(&list.snapshot()), ["one", "two"]);
    }

    #[test]
    fn sample_log_ip_tokens() {
        let list = line_list(Config::new().chunk_size(2));
        push_all(&list, SAMPLE_LOG);
        list.toggle_tokenize(TokenKind::Ip);
        assert_eq!(
            sorted_texts(&list.snapshot()),
            ["10.1.2.3", "192.168.0.7", "fe80::1"]
        );
    }

    #[test]
    fn sample_log_path_tokens() {
        let list = line_list(Config::new().chunk_size(2));
        push_all(&list, SAMPLE_LOG);
        list.toggle_tokenize(TokenKind::Path);
        assert_eq!(
            sorted_texts(&list.snapshot()),
            ["/usr/local/bin/backup.sh", "/var/www/html/index.html"]
        );
    }

    #[test]
    fn sample_log_hash_tokens() {
        let list = line_list(Config::new().chunk_size(2));
        push_all(&list, SAMPLE_LOG);
        list.toggle_tokenize(TokenKind::Hash);
        assert_eq!(
            sorted_texts(&list.snapshot()),
            ["9fceb02d0ae598e95dc970b74767f19372d61af8"]
        );
    }

    #[test]
    fn sample_log_num_tokens() {
        let list = line_list(Config::new().chunk_size(2));
        push_all(&list, SAMPLE_LOG);
        list.toggle_tokenize(TokenKind::Num);
        assert_eq!(
            sorted_texts(&list.snapshot()),
            ["19372", "40211", "40233", "52144", "74767"]
        );
    }
}

use super::segment::Segment;

pub struct TranscriptAssembler;

impl TranscriptAssembler {
    /// Collapse recognized segments into a single line of text.
    ///
    /// Each segment's text is trimmed, the trimmed pieces are joined with
    /// single spaces, and the joined result is trimmed again. No segment
    /// is dropped, so the operation is exactly strip-join-strip.
    pub fn assemble(segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|s| s.text.trim())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn segments(texts: &[&str]) -> Vec<Segment> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Segment {
                text: text.to_string(),
                start_time: i as f64,
                end_time: i as f64 + 1.0,
            })
            .collect()
    }

    #[rstest]
    #[case::trims_and_joins(&["  hello ", " world  "], "hello world")]
    #[case::single_segment(&["  test  "], "test")]
    #[case::no_segments(&[], "")]
    #[case::whitespace_only_segments(&["   ", " "], "")]
    #[case::inner_whitespace_preserved(&[" one  two "], "one  two")]
    fn test_assemble(#[case] texts: &[&str], #[case] expected: &str) {
        assert_eq!(TranscriptAssembler::assemble(&segments(texts)), expected);
    }
}

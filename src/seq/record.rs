// A FastA record: the header line (without '>') and the raw, unsanitized sequence. Sanitizing is
// left to the form, so that what the user sees is what gets sent.

#[derive(Debug, Clone, PartialEq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

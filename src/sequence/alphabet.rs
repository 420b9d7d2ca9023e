use std::fmt;

/// Case-insensitive set of ASCII residue symbols backed by a lookup table.
#[derive(Clone)]
pub struct SymbolSet {
    members: [bool; 256],
}

impl SymbolSet {
    /// Build a set from `symbols`; both cases of each letter become members.
    pub const fn new(symbols: &[u8]) -> Self {
        let mut members = [false; 256];
        let mut i = 0;
        while i < symbols.len() {
            members[symbols[i].to_ascii_uppercase() as usize] = true;
            members[symbols[i].to_ascii_lowercase() as usize] = true;
            i += 1;
        }
        Self { members }
    }

    /// Whether `symbol` belongs to the set.
    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.members[symbol as usize]
    }

    /// Whether every symbol of `sequence` belongs to the set (`true` for an
    /// empty sequence).
    pub fn contains_all(&self, sequence: &[u8]) -> bool {
        sequence.iter().all(|&symbol| self.contains(symbol))
    }

    /// Uppercase members in byte order.
    pub fn symbols(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..=255).filter(move |&b| self.contains(b) && !b.is_ascii_lowercase())
    }
}

impl fmt::Debug for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: String = self.symbols().map(char::from).collect();
        f.debug_tuple("SymbolSet").field(&symbols).finish()
    }
}

// Valid characters follow IUPAC and the IQ-TREE documentation.

/// Nucleotide bases, IUPAC ambiguity codes, gap and unknown symbols.
pub static NUCLEOTIDE_ALPHABET: SymbolSet = SymbolSet::new(b"ACGTURYWSMKBHDVNOX?-.~!*");

/// The 20 standard residues plus ambiguity, gap and unknown symbols.
pub static AMINO_ACID_ALPHABET: SymbolSet =
    SymbolSet::new(b"ARNDCQEGHILKMFPOSTWYVBZJUX?-.~*!");

/// Symbols meaning "no information" in a nucleotide alignment.
pub static NUCLEOTIDE_AMBIGUOUS: SymbolSet = SymbolSet::new(b"?N-.~!OX*");

/// Symbols meaning "no information" in an amino-acid alignment.
pub static AMINO_ACID_AMBIGUOUS: SymbolSet = SymbolSet::new(b"UX?-.~*!");

/// Symbols meaning "no information" in any other alignment.
pub static OTHER_AMBIGUOUS: SymbolSet = SymbolSet::new(b"-.*");

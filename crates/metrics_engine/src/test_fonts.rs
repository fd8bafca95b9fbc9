//! Minimal in-memory TrueType fonts for tests
//!
//! Only the tables needed to open a face are written: `head`, `hhea`,
//! `maxp`, and optionally an `OS/2` table carrying the cap height and
//! x-height. The `OS/2` table is version 2, or version 4 with
//! USE_TYPO_METRICS set when typographic metrics are given.

pub struct FontBuilder {
    units_per_em: u16,
    ascender: i16,
    descender: i16,
    line_gap: i16,
    os2: Option<(i16, i16)>,
    typo: Option<(i16, i16, i16)>,
}

impl FontBuilder {
    pub fn new(units_per_em: u16, ascender: i16, descender: i16, line_gap: i16) -> Self {
        Self {
            units_per_em,
            ascender,
            descender,
            line_gap,
            os2: None,
            typo: None,
        }
    }

    pub fn with_os2(mut self, cap_height: i16, x_height: i16) -> Self {
        self.os2 = Some((cap_height, x_height));
        self
    }

    /// Typographic ascender, descender and line gap, flagged for use
    ///
    /// Adds an `OS/2` table with zero cap height and x-height if none was
    /// requested.
    pub fn with_typo_metrics(mut self, ascender: i16, descender: i16, line_gap: i16) -> Self {
        self.typo = Some((ascender, descender, line_gap));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        // Table records sorted by tag.
        let mut tables: Vec<([u8; 4], Vec<u8>)> = Vec::new();
        if self.os2.is_some() || self.typo.is_some() {
            let (cap_height, x_height) = self.os2.unwrap_or((0, 0));
            tables.push((*b"OS/2", os2_table(cap_height, x_height, self.typo)));
        }
        tables.push((*b"head", head_table(self.units_per_em)));
        tables.push((*b"hhea", hhea_table(self.ascender, self.descender, self.line_gap)));
        tables.push((*b"maxp", maxp_table()));

        let header_len = 12 + 16 * tables.len();
        let mut data = Vec::new();
        data.extend_from_slice(&0x0001_0000u32.to_be_bytes());
        data.extend_from_slice(&(tables.len() as u16).to_be_bytes());
        data.extend_from_slice(&[0u8; 6]);

        let mut body = Vec::new();
        for (tag, table) in &tables {
            let offset = header_len + body.len();
            data.extend_from_slice(tag);
            data.extend_from_slice(&0u32.to_be_bytes());
            data.extend_from_slice(&(offset as u32).to_be_bytes());
            data.extend_from_slice(&(table.len() as u32).to_be_bytes());

            body.extend_from_slice(table);
            while body.len() % 4 != 0 {
                body.push(0);
            }
        }

        data.extend_from_slice(&body);
        data
    }
}

fn head_table(units_per_em: u16) -> Vec<u8> {
    let mut t = vec![0u8; 54];
    put_u32(&mut t, 0, 0x0001_0000);
    put_u32(&mut t, 12, 0x5F0F_3CF5);
    put_u16(&mut t, 18, units_per_em);
    // indexToLocFormat: short offsets
    put_u16(&mut t, 50, 0);
    t
}

fn hhea_table(ascender: i16, descender: i16, line_gap: i16) -> Vec<u8> {
    let mut t = vec![0u8; 36];
    put_u32(&mut t, 0, 0x0001_0000);
    put_u16(&mut t, 4, ascender as u16);
    put_u16(&mut t, 6, descender as u16);
    put_u16(&mut t, 8, line_gap as u16);
    t
}

fn maxp_table() -> Vec<u8> {
    let mut t = vec![0u8; 6];
    put_u32(&mut t, 0, 0x0000_5000);
    put_u16(&mut t, 4, 1);
    t
}

fn os2_table(cap_height: i16, x_height: i16, typo: Option<(i16, i16, i16)>) -> Vec<u8> {
    let mut t = vec![0u8; 96];
    put_u16(&mut t, 0, 2);
    if let Some((ascender, descender, line_gap)) = typo {
        put_u16(&mut t, 0, 4);
        // fsSelection bit 7: USE_TYPO_METRICS
        put_u16(&mut t, 62, 1 << 7);
        put_u16(&mut t, 68, ascender as u16);
        put_u16(&mut t, 70, descender as u16);
        put_u16(&mut t, 72, line_gap as u16);
    }
    put_u16(&mut t, 86, x_height as u16);
    put_u16(&mut t, 88, cap_height as u16);
    t
}

fn put_u16(buf: &mut [u8], at: usize, value: u16) {
    buf[at..at + 2].copy_from_slice(&value.to_be_bytes());
}

fn put_u32(buf: &mut [u8], at: usize, value: u32) {
    buf[at..at + 4].copy_from_slice(&value.to_be_bytes());
}

use std::collections::HashMap;

/// Journal abbreviation codes and the full names they stand for. These are
/// the AAS macros (`\apj`, `\mnras`, …) commonly emitted by ADS exports.
const JOURNALS: &[(&str, &str)] = &[
    ("aj", "Astronomical Journal"),
    ("actaa", "Acta Astronomica"),
    ("araa", "Annual Review of Astron and Astrophys"),
    ("apj", "Astrophysical Journal"),
    ("apjl", "Astrophysical Journal, Letters"),
    ("apjs", "Astrophysical Journal, Supplement"),
    ("ao", "Applied Optics"),
    ("apss", "Astrophysics and Space Science"),
    ("aap", "Astronomy and Astrophysics"),
    ("aapr", "Astronomy and Astrophysics Reviews"),
    ("aaps", "Astronomy and Astrophysics, Supplement"),
    ("azh", "Astronomicheskii Zhurnal"),
    ("baas", "Bulletin of the AAS"),
    ("caa", "Chinese Astronomy and Astrophysics"),
    ("cjaa", "Chinese Journal of Astronomy and Astrophysics"),
    ("icarus", "Icarus"),
    ("jcap", "Journal of Cosmology and Astroparticle Physics"),
    ("jrasc", "Journal of the RAS of Canada"),
    ("memras", "Memoirs of the RAS"),
    ("mnras", "Monthly Notices of the RAS"),
    ("na", "New Astronomy"),
    ("nar", "New Astronomy Review"),
    ("pra", "Physical Review A: General Physics"),
    ("prb", "Physical Review B: Solid State"),
    ("prc", "Physical Review C"),
    ("prd", "Physical Review D"),
    ("pre", "Physical Review E"),
    ("prl", "Physical Review Letters"),
    ("pasa", "Publications of the Astron. Soc. of Australia"),
    ("pasp", "Publications of the ASP"),
    ("pasj", "Publications of the ASJ"),
    ("rmxaa", "Revista Mexicana de Astronomia y Astrofisica"),
    ("qjras", "Quarterly Journal of the RAS"),
    ("skytel", "Sky and Telescope"),
    ("solphys", "Solar Physics"),
    ("sovast", "Soviet Astronomy"),
    ("ssr", "Space Science Reviews"),
    ("zap", "Zeitschrift fuer Astrophysik"),
    ("nat", "Nature"),
    ("iaucirc", "IAU Cirulars"),
    ("aplett", "Astrophysics Letters"),
    ("apspr", "Astrophysics Space Physics Research"),
    ("bain", "Bulletin Astronomical Institute of the Netherlands"),
    ("fcp", "Fundamental Cosmic Physics"),
    ("gca", "Geochimica Cosmochimica Acta"),
    ("grl", "Geophysics Research Letters"),
    ("jcp", "Journal of Chemical Physics"),
    ("jgr", "Journal of Geophysics Research"),
    ("jqsrt", "Journal of Quantitiative Spectroscopy and Radiative Transfer"),
    ("memsai", "Mem. Societa Astronomica Italiana"),
    ("nphysa", "Nuclear Physics A"),
    ("physrep", "Physics Reports"),
    ("physscr", "Physica Scripta"),
    ("planss", "Planetary Space Science"),
    ("procspie", "Proceedings of the SPIE"),
];

/// Read-only lookup table from journal abbreviation codes to full journal
/// names. Built once at startup and passed by reference into the row
/// formatter; a lookup miss is an error there (the table never guesses).
#[derive(Debug)]
pub struct JournalTable {
    names: HashMap<&'static str, &'static str>,
}

impl JournalTable {
    pub fn new() -> JournalTable {
        JournalTable {
            names: JOURNALS.iter().copied().collect(),
        }
    }

    /// Resolve an abbreviation code (without its leading backslash).
    pub fn resolve(&self, code: &str) -> Option<&'static str> {
        self.names.get(code).copied()
    }
}

impl Default for JournalTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        let journals = JournalTable::new();
        assert_eq!(journals.resolve("apj"), Some("Astrophysical Journal"));
        assert_eq!(journals.resolve("mnras"), Some("Monthly Notices of the RAS"));
        assert_eq!(journals.resolve("nat"), Some("Nature"));
    }

    #[test]
    fn test_unknown_code_is_a_miss() {
        let journals = JournalTable::new();
        assert_eq!(journals.resolve("nope"), None);
        // codes are matched verbatim, no case folding
        assert_eq!(journals.resolve("ApJ"), None);
    }
}

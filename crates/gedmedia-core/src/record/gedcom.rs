//! Minimal GEDCOM line lookup for media (`OBJE`) records.

/// Splits a GEDCOM line into `(level, tag, value)`. Pointer ids (`@M1@`) are
/// returned as the tag with the following word as value.
fn split_line(line: &str) -> Option<(usize, &str, &str)> {
    let line = line.trim_end_matches('\r');
    let (level, rest) = line.trim_start().split_once(' ')?;
    let level: usize = level.parse().ok()?;
    let (tag, value) = match rest.split_once(' ') {
        Some((tag, value)) => (tag, value),
        None => (rest, ""),
    };
    Some((level, tag, value))
}

/// Looks up the value of `path` starting at `level` in a raw GEDCOM record.
///
/// `path` is one tag (`"TITL"`) or a colon-separated chain (`"FORM:TYPE"`),
/// where each further tag must appear one level below the previous match.
/// `CONT`/`CONC` continuation lines under the final tag are folded in.
pub fn gedcom_value(path: &str, level: usize, record: &str) -> Option<String> {
    let tags: Vec<&str> = path.split(':').filter(|t| !t.is_empty()).collect();
    if tags.is_empty() {
        return None;
    }

    let lines: Vec<(usize, &str, &str)> = record.lines().filter_map(split_line).collect();
    let mut start = 0;
    // Level of the previous match; lines at or above it end the search scope.
    let mut parent_level: Option<usize> = None;

    for (depth, tag) in tags.iter().enumerate() {
        let want_level = level + depth;
        let mut found = None;
        for (i, &(lvl, t, _)) in lines.iter().enumerate().skip(start) {
            if let Some(parent) = parent_level {
                if lvl <= parent {
                    break;
                }
            }
            if lvl == want_level && t == *tag {
                found = Some(i);
                break;
            }
        }
        let idx = found?;
        start = idx + 1;
        parent_level = Some(want_level);
    }

    let last = start - 1;
    let (lvl, _, first) = lines[last];
    let mut value = first.to_string();
    for &(l, t, v) in &lines[start..] {
        if l != lvl + 1 {
            if l <= lvl {
                break;
            }
            continue;
        }
        match t {
            "CONT" => {
                value.push('\n');
                value.push_str(v);
            }
            "CONC" => value.push_str(v),
            _ => {}
        }
    }
    Some(value)
}

/// Extracts the xref from a `0 @X1@ OBJE` header line.
pub fn record_xref(record: &str) -> Option<String> {
    let first = record.lines().next()?;
    let (level, tag, _) = split_line(first)?;
    if level != 0 {
        return None;
    }
    let id = tag.strip_prefix('@')?.strip_suffix('@')?;
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBJE: &str = "0 @M1@ OBJE\n\
        1 FILE photos/1901/wedding.jpg\n\
        2 FORM jpg\n\
        3 TYPE Photo\n\
        2 TITL Wedding of John and Mary\n\
        1 NOTE Taken outside\n\
        2 CONT the church\n\
        2 CONC yard\n\
        1 CHAN\n\
        2 DATE 1 JAN 2011";

    #[test]
    fn simple_tag() {
        assert_eq!(
            gedcom_value("FILE", 1, OBJE).as_deref(),
            Some("photos/1901/wedding.jpg")
        );
    }

    #[test]
    fn nested_path() {
        assert_eq!(gedcom_value("FORM:TYPE", 2, OBJE).as_deref(), Some("Photo"));
        assert_eq!(gedcom_value("FILE:FORM", 1, OBJE).as_deref(), Some("jpg"));
    }

    #[test]
    fn level_matters() {
        assert_eq!(gedcom_value("TITL", 1, OBJE), None);
        assert_eq!(
            gedcom_value("TITL", 2, OBJE).as_deref(),
            Some("Wedding of John and Mary")
        );
    }

    #[test]
    fn continuation_lines() {
        assert_eq!(
            gedcom_value("NOTE", 1, OBJE).as_deref(),
            Some("Taken outside\nthe churchyard")
        );
    }

    #[test]
    fn nested_search_stays_in_scope() {
        // DATE lives under CHAN, not FILE.
        assert_eq!(gedcom_value("FILE:DATE", 1, OBJE), None);
    }

    #[test]
    fn xref_from_header() {
        assert_eq!(record_xref(OBJE).as_deref(), Some("M1"));
        assert_eq!(record_xref("1 FILE x.jpg"), None);
        assert_eq!(record_xref("0 @@ OBJE"), None);
    }
}

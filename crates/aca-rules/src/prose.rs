//! Static text around the rule table: software inventory, input and output
//! files, usage pointer and the abbreviation key.

use aca_model::{BulletList, BulletStyle, GlossaryEntry, ListItem, StaticBlock};

pub const CHECKLIST_TITLE: &str = "ACA Load Review Checklist";

pub const CHECKLIST_AUTHORS: [&str; 4] =
    ["E. Martin", "S. Bucher", "T. Aldcroft", "J. Connelly"];

pub const RUN_INSTRUCTIONS_URL: &str = "http://asc.harvard.edu/mta/ASPECT/run_starcheck.html";

/// Blocks rendered before the rule table.
pub fn front_matter() -> Vec<StaticBlock> {
    vec![
        StaticBlock::Paragraph {
            text: "The following software and data files are installed in the HEAD LAN \
                   environment."
                .to_string(),
        },
        list(
            "Software Packages",
            BulletList::plain(["starcheck", "SAUSAGE", "make_stars"]),
        ),
        StaticBlock::Spacer,
        list("Load Input Files", load_input_files()),
        list(
            "Starcheck's Data Files",
            BulletList::plain([
                "ODB File: $SKA/data/starcheck/fid_CHARACTERIS_JUL01",
                "Bad Agasc List: $SKA/data/starcheck/agasc.bad",
                "Bad Pixel File: $SKA/data/starcheck/ACABadPixels",
                "Acq Stats RDB: $SKA/data/starcheck/bad_acq_stars.rdb",
            ]),
        ),
        StaticBlock::Spacer,
        list("Output Files", output_files()),
        StaticBlock::Spacer,
        StaticBlock::Link {
            title: "Instructions on how to use Software".to_string(),
            href: RUN_INSTRUCTIONS_URL.to_string(),
        },
        StaticBlock::Spacer,
        StaticBlock::Heading {
            level: 1,
            text: "Checks".to_string(),
        },
    ]
}

/// Blocks rendered after the rule table.
pub fn back_matter() -> Vec<StaticBlock> {
    vec![StaticBlock::Glossary {
        title: "Key".to_string(),
        entries: vec![
            GlossaryEntry::new("AS", "acquisition star"),
            GlossaryEntry::new("GS", "guide star"),
            GlossaryEntry::new("FL", "fiducial light"),
            GlossaryEntry::new("#AS", "number of acquisition stars"),
            GlossaryEntry::new("#GS", "number of guide stars"),
            GlossaryEntry::new("#FL", "number of fiducial lights"),
            GlossaryEntry::new("#MW", "number of monitor windows"),
            GlossaryEntry::new("HW", "search box single-axis half-width"),
            GlossaryEntry::new("MU", "maneuver uncertainty (arcsec)"),
        ],
    }]
}

fn list(title: &str, list: BulletList) -> StaticBlock {
    StaticBlock::List {
        title: title.to_string(),
        list,
    }
}

fn load_input_files() -> BulletList {
    let mut items: Vec<ListItem> = [
        "Backstop: ./CRddd.hhvv.backstop",
        "Guide Summary: ./mps/mgddd:hhvv.sum",
        "OR: ./mps/or/MMMddyy_v.or",
        "Maneuver: ./mps/mmddd:hhvv.sum",
    ]
    .into_iter()
    .map(ListItem::new)
    .collect();
    items.push(
        ListItem::new("Dot: ./mps/mdddd:hhvv.dot").with_children(BulletList::plain([
            "starcheck confirms that the DOT has been modified by SAUSAGE",
        ])),
    );
    items.extend(
        [
            "Mech Check: ./output/TEST_mechcheck.txt",
            "SOE: ./mps/soe/msddd:hhvv.soe",
            "Fidsel: ./History/FIDSEL.txt",
            "Dither: ./History/DITHER.txt",
            "Maneuver Error: ./output/MMMddyyv_ManErr.txt",
            "Processing Summ: ./mps/msddd:hhvv.sum",
        ]
        .into_iter()
        .map(ListItem::new),
    );
    BulletList::new(BulletStyle::Disc, items)
}

fn output_files() -> BulletList {
    let products = BulletList::new(
        BulletStyle::Circle,
        [
            "stars_OBSID.gif",
            "MMMDDYY_v.or.html",
            "CRddd:hhvv.backstop.html",
            "make_stars.txt",
            "make_stars.txt.html",
            "mdddd:hhvv.dot.html",
            "mgddd:hhvv.sum.html",
            "mmddd:hhvv.sum.html",
        ]
        .into_iter()
        .map(ListItem::new)
        .collect(),
    );
    BulletList::new(
        BulletStyle::Disc,
        vec![
            ListItem::new("/data/mpcrit1/mplogs/YYYY/MMMDDYY/starcheck.html"),
            ListItem::new("/data/mpcrit1/mplogs/YYYY/MMMDDYY/starcheck.txt"),
            ListItem::new("/data/mpcrit1/mplogs/YYYY/MMMDDYY/starcheck/").with_children(products),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_matter_ends_with_checks_heading() {
        let blocks = front_matter();
        assert_eq!(
            blocks.last(),
            Some(&StaticBlock::Heading {
                level: 1,
                text: "Checks".to_string()
            })
        );
    }

    #[test]
    fn dot_file_has_nested_note() {
        let files = load_input_files();
        let dot = files
            .items
            .iter()
            .find(|item| item.text.starts_with("Dot:"))
            .expect("dot entry");
        let children = dot.children.as_ref().expect("nested list");
        assert_eq!(children.items.len(), 1);
        assert_eq!(files.items.len(), 11);
    }

    #[test]
    fn key_defines_catalog_column_names() {
        let blocks = back_matter();
        let [StaticBlock::Glossary { entries, .. }] = blocks.as_slice() else {
            panic!("expected a single glossary block");
        };
        for column in crate::STAR_CATALOG_COLUMNS {
            assert!(entries.iter().any(|entry| entry.term == column), "{column}");
        }
    }
}

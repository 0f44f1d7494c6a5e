//! Property tests over generated supported-framework tables.

use proptest::prelude::*;

use tfm_core::{natural_cmp, RuleSnapshot, RuleTable, ValueEntry};
use tfm_enum::{FrameworkEnumProvider, SupportedTargetFrameworksProvider};

/// Distinct (major, minor) versions rendered as `.NETCoreApp` rows.
fn versions() -> impl Strategy<Value = Vec<(u16, u16)>> {
    prop::collection::btree_set((0u16..40, 0u16..12), 0..24)
        .prop_map(|set| set.into_iter().collect())
        .prop_shuffle()
}

fn snapshot_for(rows: &[(u16, u16)]) -> RuleSnapshot {
    let mut table = RuleTable::new();
    for (major, minor) in rows {
        table = table.with_row(
            format!(".NETCoreApp,Version=v{major}.{minor}"),
            [("DisplayName", format!(".NET {major}.{minor}"))],
        );
    }
    RuleSnapshot::new()
        .with_table(
            "ConfigurationGeneral",
            RuleTable::new().with_property("TargetFrameworkIdentifier", ".NETCoreApp"),
        )
        .with_table("SupportedNETCoreAppTargetFramework", table)
}

fn run(rows: &[(u16, u16)]) -> Vec<ValueEntry> {
    SupportedTargetFrameworksProvider::default()
        .transform(&snapshot_for(rows))
        .unwrap()
}

proptest! {
    #[test]
    fn output_is_exactly_the_table_rows(rows in versions()) {
        let values = run(&rows);
        prop_assert_eq!(values.len(), rows.len());
        for (major, minor) in &rows {
            let name = format!(".NETCoreApp,Version=v{major}.{minor}");
            prop_assert!(values.iter().any(|v| v.name == name));
        }
    }

    #[test]
    fn output_is_sorted_by_version(rows in versions()) {
        let values = run(&rows);
        let mut expected = rows.clone();
        expected.sort();
        let got: Vec<String> = values.iter().map(|v| v.display_name.clone()).collect();
        let want: Vec<String> = expected
            .iter()
            .map(|(major, minor)| format!(".NET {major}.{minor}"))
            .collect();
        prop_assert_eq!(got, want);
        for pair in values.windows(2) {
            prop_assert!(natural_cmp(&pair[0].display_name, &pair[1].display_name).is_le());
        }
    }

    #[test]
    fn input_order_does_not_matter(rows in versions()) {
        let mut reversed = rows.clone();
        reversed.reverse();
        prop_assert_eq!(run(&rows), run(&reversed));
    }

    #[test]
    fn idempotent(rows in versions()) {
        let snapshot = snapshot_for(&rows);
        let provider = SupportedTargetFrameworksProvider::default();
        prop_assert_eq!(
            provider.transform(&snapshot).unwrap(),
            provider.transform(&snapshot).unwrap()
        );
    }
}

use msa_windows::{
    Alignment, RangeSet, RegularWindows, SeqRecord, SequenceType, WindowError, WindowSlicer,
    WindowSpec,
};
use proptest::prelude::*;
use test_case::test_case;

proptest! {
    #[test]
    fn regular_windows_stay_inside_the_alignment(
        window_size in 1usize..64,
        step_size in 1usize..64,
        alignment_length in 0usize..512,
    ) {
        let windows: Vec<WindowSpec> =
            RegularWindows::new(window_size, step_size, alignment_length).unwrap().collect();

        prop_assert_eq!(windows.len(), alignment_length.div_ceil(step_size));
        for (idx, window) in windows.iter().enumerate() {
            prop_assert_eq!(window.index(), idx);
            prop_assert!(window.start() <= window.end());
            prop_assert!(window.end() <= alignment_length);
            prop_assert!(window.len() <= window_size);
            prop_assert_eq!(window.mid(), idx * step_size);
            prop_assert!(!window.reverse_complement());
        }
    }

    #[test]
    fn interior_windows_have_full_width(
        half in 1usize..20,
        odd in any::<bool>(),
        step_size in 1usize..16,
    ) {
        let window_size = 2 * half + usize::from(odd);
        let alignment_length = 200;
        for window in RegularWindows::new(window_size, step_size, alignment_length).unwrap() {
            let center = window.mid();
            if center >= half && center + window_size - half <= alignment_length {
                prop_assert_eq!(window.start(), center - half);
                prop_assert_eq!(window.len(), window_size);
            }
        }
    }

    #[test]
    fn range_windows_are_ordered_and_flagged(
        ranges in proptest::collection::vec((0i64..1000, 0i64..1000), 1..20),
    ) {
        let text: String = ranges.iter().map(|(s, e)| format!("{s},{e}\n")).collect();
        let windows: Vec<WindowSpec> = RangeSet::parse(&text, "ranges.csv")
            .unwrap()
            .into_windows(false, 1000)
            .unwrap()
            .collect();

        prop_assert_eq!(windows.len(), ranges.len());
        for (window, &(start, end)) in windows.iter().zip(&ranges) {
            prop_assert!(window.start() <= window.end());
            prop_assert_eq!(window.reverse_complement(), start > end);
            prop_assert_eq!(window.len() as i64, (start - end).abs());
            prop_assert_eq!(window.mid() as i64, (start + end) / 2);
        }
    }
}

proptest! {
    #[test]
    fn range_windows_fit_the_alignment_they_slice(
        ranges in proptest::collection::vec((0i64..120, 0i64..120), 1..20),
        width in 0usize..80,
        nucleotide in any::<bool>(),
    ) {
        let alignment = Alignment::new(vec![
            SeqRecord::new("a", "A".repeat(width)),
            SeqRecord::new("b", "C".repeat(width)),
        ])
        .unwrap();
        let sequence_type = if nucleotide {
            SequenceType::Nucleotide
        } else {
            SequenceType::AminoAcid
        };
        let slicer = WindowSlicer::new(&alignment, sequence_type);

        let text: String = ranges.iter().map(|(s, e)| format!("{s},{e}\n")).collect();
        let windows = RangeSet::parse(&text, "ranges.csv")
            .unwrap()
            .into_windows(false, width)
            .unwrap();

        for (window, &(start, end)) in windows.zip(&ranges) {
            prop_assert!(window.start() <= window.end());
            prop_assert!(window.end() <= width);
            prop_assert_eq!(window.mid() as i64, (start + end) / 2);
            prop_assert_eq!(window.reverse_complement(), start > end);

            let fragment = slicer.slice(&window);
            prop_assert_eq!(fragment.width(), window.len());
            prop_assert_eq!(fragment.num_rows(), 2);
        }
    }
}

#[test]
fn even_window_is_centred_with_left_bias() {
    let window = RegularWindows::new(10, 50, 200).unwrap().nth(1).unwrap();
    assert_eq!(window.mid(), 50);
    assert_eq!((window.start(), window.end()), (45, 55));
}

#[test]
fn hundred_columns_window_ten_step_twenty_five() {
    let windows: Vec<_> = RegularWindows::new(10, 25, 100).unwrap().collect();
    let centres: Vec<_> = windows.iter().map(WindowSpec::mid).collect();
    assert_eq!(centres, vec![0, 25, 50, 75]);
    assert_eq!(windows[0].start(), 0);
    let names: Vec<_> = windows.iter().map(WindowSpec::name).collect();
    assert_eq!(names, vec!["1", "26", "51", "76"]);
}

#[test_case("5,2,myname", false => (2, 5, true, "myname".to_string()) ; "inverted zero based with name")]
#[test_case("1,10", true => (0, 10, false, "6".to_string()) ; "one based forward")]
#[test_case("10,1", true => (1, 9, true, "6".to_string()) ; "one based inverted")]
#[test_case(" 3 , 9 , exon 2 ", false => (3, 9, false, "exon 2".to_string()) ; "fields are trimmed")]
#[test_case("4,4", false => (4, 4, false, "5".to_string()) ; "empty range stays forward")]
fn range_record(line: &str, one_based: bool) -> (usize, usize, bool, String) {
    let window = RangeSet::parse(line, "ranges.csv")
        .unwrap()
        .into_windows(one_based, 100)
        .unwrap()
        .next()
        .unwrap();
    (
        window.start(),
        window.end(),
        window.reverse_complement(),
        window.name().to_string(),
    )
}

#[test_case("7\n" ; "single column")]
#[test_case("x,10\n" ; "non numeric start")]
#[test_case("1,ten\n" ; "non numeric end")]
#[test_case("1,10,a\n2,20\n" ; "column count changes")]
#[test_case("1.5,10\n" ; "fractional start")]
fn malformed_range_files(text: &str) {
    let err = RangeSet::parse(text, "custom.csv").unwrap_err();
    assert!(matches!(err, WindowError::MalformedRangeFile { .. }));
    assert!(err.to_string().contains("custom.csv"));
}

#[test]
fn zero_window_size_is_rejected_before_generation() {
    let err = RegularWindows::new(0, 25, 100).unwrap_err();
    assert_eq!(err.to_string(), "invalid window size: 0 (minimum value is 1)");
}

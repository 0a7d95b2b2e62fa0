use std::fs;

use tempfile::TempDir;

use picks_cli::pipeline::{ingest, report, resolve};

#[test]
fn end_to_end_run_over_messy_headers() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("catalog.csv");
    // Headers deliberately messy: casing, underscores, near-miss spellings.
    // "ReleaseYear" is too far from the query "year" to clear the cutoff,
    // so that field exercises the fallback path.
    fs::write(
        &input,
        "\u{feff}Title , GENRES ,ReleaseYear,IMDB_Rating,Available_Countries\n\
         The Wire,Crime,2002,9.3,\"US, GB\"\n\
         Filler,Reality,2020,4.2,US\n\
         Chernobyl,Drama,2019,9.4,US\n",
    )
    .unwrap();
    let output = dir.path().join("HBO_Max_Top_Picks.txt");

    let dataset = ingest(&input).unwrap();
    let resolution = resolve(&dataset, 0.6);
    let summary = report(&dataset, &resolution, 7.5, &output).unwrap();

    assert_eq!(summary.total_rows, 3);
    assert_eq!(summary.matched, 2);
    let report_text = fs::read_to_string(&output).unwrap();
    assert_eq!(
        report_text,
        "Title: Chernobyl\nGenre: Drama\nYear: 2019\nIMDb Rating: 9.4\nAvailable in: US\n\n\
         Title: The Wire\nGenre: Crime\nYear: 2002\nIMDb Rating: 9.3\nAvailable in: US, GB\n\n"
    );
}

#[test]
fn missing_input_surfaces_as_error() {
    let dir = TempDir::new().unwrap();
    let err = ingest(&dir.path().join("absent.csv")).unwrap_err();
    assert!(err.to_string().contains("read input dataset"));
}

#[test]
fn threshold_is_honored_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("catalog.csv");
    fs::write(
        &input,
        "title,genres,releaseyear,imdbaveragerating,availablecountries\n\
         A,Drama,2001,8.0,US\n\
         B,Drama,2002,8.9,US\n",
    )
    .unwrap();
    let output = dir.path().join("out.txt");

    let dataset = ingest(&input).unwrap();
    let resolution = resolve(&dataset, 0.6);
    let summary = report(&dataset, &resolution, 8.5, &output).unwrap();

    assert_eq!(summary.matched, 1);
    assert!(fs::read_to_string(&output).unwrap().starts_with("Title: B\n"));
}

use marketview_core::utils::sort_utils::{
    build_sort_options, decode_sort_option, encode_sort_option,
};
use marketview_core::{
    AssetMarketData, ColumnKey, ColumnSet, SortColumn, SortDirection, SortSelection, TableSort,
};
use serde_json::json;

#[test]
fn test_dropdown_codec_scenario() {
    let columns = ColumnSet::new(vec![
        SortColumn::new(ColumnKey::ListPrice, "Price"),
        SortColumn::new(ColumnKey::ListedDate, "Date"),
    ])
    .expect("Failed to build column set");

    assert_eq!(
        build_sort_options(&columns),
        vec![
            "Price: low to high",
            "Price: high to low",
            "Date: low to high",
            "Date: high to low",
        ]
    );

    let selection = decode_sort_option("Date: high to low", &columns)
        .expect("Option label should decode");
    assert_eq!(selection, SortSelection::new(1, SortDirection::Desc));

    let label = encode_sort_option(selection, &columns).expect("Selection should encode");
    assert_eq!(label, "Date: high to low");
}

#[test]
fn test_round_trip_over_view_column_sets() {
    for columns in [ColumnSet::asset_market(), ColumnSet::collection_overview()] {
        for column in 0..columns.len() {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let selection = SortSelection::new(column, direction);
                let label = encode_sort_option(selection, &columns)
                    .expect("In-range selection should encode");
                assert_eq!(decode_sort_option(&label, &columns), Some(selection));
            }
        }
    }
}

#[test]
fn test_table_sort_drives_backend_params() {
    let mut table = TableSort::new(
        ColumnSet::asset_market(),
        ColumnKey::ListPrice,
        SortDirection::Asc,
    );
    assert_eq!(table.sort_params(), Some(("LIST_PRICE", "asc")));
    assert_eq!(table.options().len(), 8);

    assert!(table.select_option("% Difference: high to low"));
    assert_eq!(table.sort_params(), Some(("APPRAISAL_DIFFERENCE", "desc")));
    assert_eq!(
        table.selected_label().as_deref(),
        Some("% Difference: high to low")
    );

    // Unknown options leave the previous selection in place.
    assert!(!table.select_option("Rarity: high to low"));
    assert_eq!(table.sort_params(), Some(("APPRAISAL_DIFFERENCE", "desc")));
}

#[test]
fn test_sorted_rows_render_for_display() {
    let assets: Vec<AssetMarketData> = serde_json::from_value(json!([
        {
            "contract": "0x05db",
            "token_id": "1",
            "last_sale_price": "1000000000000000000",
            "last_appraisal": "2000000000000000000",
            "list_price": "1500000000000000000",
            "appraisal_change": -1.25
        },
        {
            "contract": "0x05db",
            "token_id": "2",
            "last_sale_price": null,
            "last_appraisal": "1000000000000000000",
            "list_price": "1100000000000000000",
            "appraisal_change": null
        }
    ]))
    .expect("Failed to deserialize asset fixtures");

    let rows: Vec<_> = assets.iter().map(|a| a.to_row(4)).collect();

    assert_eq!(rows[0].list_price, "1.5000");
    assert_eq!(rows[0].appraisal_change, "-1.25%");
    assert_eq!(rows[0].price_deviation, "25.00% (underpriced)");

    assert_eq!(rows[1].last_sale_price, "-");
    assert_eq!(rows[1].appraisal_change, "-");
    assert_eq!(rows[1].price_deviation, "10.00% (overpriced)");
}

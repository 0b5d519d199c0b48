// ==========================================
// 转换流程集成测试
// ==========================================
// 测试目标: 解析 → 表头 → 列语义 → 匹配 → 检查 → 构建 → 导出 全链路
// ==========================================


use camvio_inventory_import::api::{ApiError, ConversionSession};
use camvio_inventory_import::config::{config_keys, ConfigManager};
use camvio_inventory_import::domain::{Advisory, DeviceSelection, ProfileType, TemplateVariant};
use camvio_inventory_import::logging;
use chrono::NaiveDate;
use test_helpers::{create_api, widget_api, write_temp_csv, CatalogBuilder, ONT_TEMPLATE};

fn fixed_now() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 17)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

fn session_with(path: &std::path::Path, selections: Vec<DeviceSelection>) -> ConversionSession {
    let mut session = ConversionSession::new(path);
    session.selections = selections;
    session
}

#[test]
fn test_widget_end_to_end() {
    logging::init_test();

    let file = write_temp_csv(
        "Description,MAC,SN,FSAN\nWidget-100 Gateway,11:22:33:44:55:66,SER1,FS1\n",
    )
    .unwrap();
    let session = session_with(
        file.path(),
        vec![DeviceSelection::new("Widget-100", ProfileType::Ont, "WAREHOUSE")],
    );

    let report = widget_api().run_at(&session, fixed_now()).unwrap();

    assert_eq!(report.header_row, 0);
    assert!(report.failures.is_empty());
    assert!(report.advisories.is_empty());
    assert_eq!(report.records.len(), 1);

    let record = &report.records[0];
    assert_eq!(record.profile_type.code(), "ONT");
    assert_eq!(record.device_name, "Widget-100");
    assert_eq!(record.attribute_string, "MAC=11:22:33:44:55:66|SN=SER1|ONT_FSAN=FS1");
    assert_eq!(record.location, "WAREHOUSE");
    assert_eq!(record.status, "UNASSIGNED");

    assert_eq!(
        report.export_csv,
        "device_profile,device_name,device_numbers,inventory_location,inventory_status\n\
         ONT,Widget-100,MAC=11:22:33:44:55:66|SN=SER1|ONT_FSAN=FS1,WAREHOUSE,UNASSIGNED\n"
    );
    assert_eq!(report.export_file_name, "inventory_export_20261017_083000.csv");
}

#[test]
fn test_banner_rows_and_header_priority() {
    let file = write_temp_csv(
        "Distributor Shipment Report,,,\n\
         Description,,,\n\
         Item Description,MAC Address,Serial Number,FSAN\n\
         GM1028H Router,AA:AA,S-1,F-1\n\
         GM1028 Router,BB:BB,S-2,F-2\n\
         Spare cable,,,\n",
    )
    .unwrap();

    let catalog = CatalogBuilder::new()
        .device("GM1028", "CX_ROUTER", None)
        .device("GM1028H", "CX_ROUTER", None)
        .device("GS4220E", "ONT", Some(ONT_TEMPLATE))
        .build();
    let api = create_api(ConfigManager::in_memory(), catalog);

    let preview = api.preview(file.path(), None).unwrap();

    assert_eq!(preview.header_row, 2);
    assert_eq!(preview.row_count, 3);
    let names: Vec<&str> = preview
        .device_matches
        .iter()
        .map(|m| m.device_name.as_str())
        .collect();
    // GS4220E 无命中，不出现
    assert_eq!(names, vec!["GM1028", "GM1028H"]);
    assert!(preview.device_matches.iter().all(|m| m.match_count == 1));
}

#[test]
fn test_missing_description_is_fatal() {
    let file = write_temp_csv("Model,MAC,Serial\nX1,AA,S1\n").unwrap();
    let session = session_with(
        file.path(),
        vec![DeviceSelection::new("X1", ProfileType::Ont, "WAREHOUSE")],
    );

    let result = widget_api().run(&session);

    assert!(matches!(result, Err(ApiError::MissingColumn(ref role)) if role == "description"));
}

#[test]
fn test_zero_rows_still_produce_export() {
    let file = write_temp_csv("Description,MAC,SN,FSAN\nSomething else,AA,S1,F1\n").unwrap();
    let session = session_with(
        file.path(),
        vec![DeviceSelection::new("Widget-100", ProfileType::Ont, "WAREHOUSE")],
    );

    let report = widget_api().run_at(&session, fixed_now()).unwrap();

    assert!(report.records.is_empty());
    assert_eq!(report.selections[0].match_count, 0);
    assert_eq!(
        report.export_csv,
        "device_profile,device_name,device_numbers,inventory_location,inventory_status\n"
    );

    let out_dir = tempfile::tempdir().unwrap();
    let paths = report.write_outputs(out_dir.path()).unwrap();
    assert!(paths.export.exists());
    assert!(paths.failures.is_none());
}

#[test]
fn test_row_failures_do_not_stop_the_run() {
    let file = write_temp_csv(
        "Description,MAC,SN,FSAN\n\
         Widget-100,AA,,F1\n\
         Widget-100,BB,S2,F2\n\
         Widget-100,NO VALUE,S3,\n",
    )
    .unwrap();
    let mut session = session_with(
        file.path(),
        vec![DeviceSelection::new("Widget-100", ProfileType::Ont, "WAREHOUSE")],
    );
    session.company_name = Some("Acme Fiber".to_string());

    let report = widget_api().run_at(&session, fixed_now()).unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].missing_fields, vec!["Serial Number"]);
    assert_eq!(report.failures[1].missing_fields, vec!["MAC", "FSAN"]);
    assert_eq!(
        report.failures_csv.lines().nth(2),
        Some("Widget-100,MAC;FSAN,NO VALUE,S3,")
    );

    let out_dir = tempfile::tempdir().unwrap();
    let paths = report.write_outputs(out_dir.path()).unwrap();
    assert_eq!(
        paths.export.file_name().unwrap().to_str().unwrap(),
        "acmefiber_20261017_083000.csv"
    );
    assert_eq!(
        paths.failures.unwrap().file_name().unwrap().to_str().unwrap(),
        "acmefiber_20261017_083000_failures.csv"
    );
}

#[test]
fn test_catalog_miss_uses_generic_template_and_operator_type() {
    let file = write_temp_csv("Description,MAC,SN,FSAN\nNova Mesh Pod,AA,S1,F1\n").unwrap();
    let session = session_with(
        file.path(),
        vec![DeviceSelection::new("Nova Mesh Pod", ProfileType::Mesh, "VAN 2")],
    );

    let report = widget_api().run_at(&session, fixed_now()).unwrap();

    assert_eq!(report.records[0].profile_type, ProfileType::Mesh);
    assert_eq!(report.records[0].attribute_string, "MAC=AA|SN=S1|MESH_FSAN=F1");
    assert_eq!(
        report.advisories,
        vec![
            Advisory::CatalogMiss {
                device_name: "Nova Mesh Pod".to_string()
            },
            Advisory::CustomLocation {
                device_name: "Nova Mesh Pod".to_string(),
                location: "VAN 2".to_string()
            },
        ]
    );
}

#[test]
fn test_type_mismatch_warns_by_default_and_blocks_when_configured() {
    let file = write_temp_csv("Description,MAC,SN,FSAN\nWidget-100,AA,S1,F1\n").unwrap();
    let session = session_with(
        file.path(),
        vec![DeviceSelection::new("Widget-100", ProfileType::Router, "WAREHOUSE")],
    );

    let report = widget_api().run_at(&session, fixed_now()).unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].profile_type, ProfileType::Router);
    assert!(matches!(report.advisories[0], Advisory::TypeMismatch { .. }));

    let config = ConfigManager::in_memory();
    config.set(config_keys::BLOCK_ON_TYPE_MISMATCH, "true").unwrap();
    let catalog = CatalogBuilder::new()
        .device("Widget-100", "ONT", Some(ONT_TEMPLATE))
        .build();
    let result = create_api(config, catalog).run(&session);

    assert!(matches!(result, Err(ApiError::SelectionRejected(_))));
}

#[test]
fn test_alternate_template_and_ont_overrides() {
    let file = write_temp_csv("Description,MAC,SN,FSAN\nGS4220E ONT,AA,S1,CXNK01\n").unwrap();
    let catalog = CatalogBuilder::new()
        .device("GS4220E", "ONT", Some(ONT_TEMPLATE))
        .alternate(
            "GS4220E",
            "ONT_FSAN=<<FSAN>>|ONT_PORT=<<ONT_PORT>>|ONT_PROFILE_ID=<<ONT_PROFILE_ID>>|ONT_MOMENTUM_PASSWORD=<<ONT_MOMENTUM_PASSWORD>>",
        )
        .build();

    let mut selection = DeviceSelection::new("GS4220E", ProfileType::Ont, "WAREHOUSE");
    selection.template_variant = TemplateVariant::Alternate;
    selection.overrides.ont_port = "G1".to_string();
    selection.overrides.ont_profile_id = "GS4220E".to_string();
    let session = session_with(file.path(), vec![selection]);

    let report = create_api(ConfigManager::in_memory(), catalog)
        .run_at(&session, fixed_now())
        .unwrap();

    assert_eq!(
        report.records[0].attribute_string,
        "ONT_FSAN=CXNK01|ONT_PORT=G1|ONT_PROFILE_ID=GS4220E|ONT_MOMENTUM_PASSWORD=NO VALUE"
    );
}

#[test]
fn test_ont_selection_values_override_catalog_literals() {
    let file = write_temp_csv(
        "Description,MAC,SN,FSAN\nGS4227E ONT,AA,S1,CXNK02\nXG-9 ONT,BB,S2,CXNK03\n",
    )
    .unwrap();
    let catalog = CatalogBuilder::new()
        .device(
            "GS4227E",
            "ONT",
            Some("MAC=<<MAC>>|SN=<<SN>>|ONT_FSAN=<<FSAN>>|ONT_PORT=G1|ONT_PROFILE_ID=GS4227E"),
        )
        .build();
    let api = create_api(ConfigManager::in_memory(), catalog);

    // 建议值来自目录字面量，操作员随后修改
    let preview = api.preview(file.path(), None).unwrap();
    let mut suggestions = api.suggest_selections(&preview).unwrap();
    assert_eq!(suggestions[0].overrides.ont_port, "G1");
    suggestions[0].overrides.ont_port = "x1".to_string();
    suggestions[0].overrides.ont_profile_id = "CUSTOM".to_string();

    let mut missing = DeviceSelection::new("XG-9", ProfileType::Ont, "WAREHOUSE");
    missing.overrides.ont_port = "G2".to_string();
    missing.overrides.ont_profile_id = "XG-9".to_string();
    suggestions.push(missing);

    let session = session_with(file.path(), suggestions);
    let report = api.run_at(&session, fixed_now()).unwrap();

    assert_eq!(
        report.records[0].attribute_string,
        "MAC=AA|SN=S1|ONT_FSAN=CXNK02|ONT_PORT=x1|ONT_PROFILE_ID=CUSTOM"
    );
    assert_eq!(
        report.records[1].attribute_string,
        "MAC=BB|SN=S2|ONT_FSAN=CXNK03|ONT_ID=NO VALUE|ONT_NODENAME=NO VALUE|ONT_PORT=G2|ONT_PROFILE_ID=XG-9|ONT_MOMENTUM_PASSWORD=NO VALUE"
    );
}

#[test]
fn test_model_name_and_duplicate_selections() {
    let file = write_temp_csv("Description,MAC,SN,FSAN\nWGT100 gateway,AA,S1,F1\n").unwrap();

    let mut by_model = DeviceSelection::new("Widget-100", ProfileType::Ont, "WAREHOUSE");
    by_model.model_name = Some("WGT100".to_string());
    let session = session_with(file.path(), vec![by_model.clone(), by_model]);

    let report = widget_api().run_at(&session, fixed_now()).unwrap();

    // 同名选择不去重
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.selections[0].search_text, "WGT100");
    assert!(report.records.iter().all(|r| r.device_name == "Widget-100"));
}

#[test]
fn test_session_file_resolves_relative_paths() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("stock.csv"),
        "Description,MAC,SN,FSAN\nWidget-100,AA,S1,F1\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("session.json"),
        r#"{
            "input_path": "stock.csv",
            "company_name": "Acme",
            "output_dir": "out",
            "selections": [{"device_name": "Widget-100", "profile_type": "ONT"}]
        }"#,
    )
    .unwrap();

    let session = ConversionSession::load(dir.path().join("session.json")).unwrap();
    assert_eq!(session.input_path, dir.path().join("stock.csv"));
    assert_eq!(session.output_dir, Some(dir.path().join("out")));

    let report = widget_api().run_at(&session, fixed_now()).unwrap();
    let paths = report
        .write_outputs(session.output_dir.as_ref().unwrap())
        .unwrap();
    let written = std::fs::read_to_string(paths.export).unwrap();
    assert!(written.contains("Widget-100,MAC=AA|SN=S1|ONT_FSAN=F1,WAREHOUSE,UNASSIGNED"));
}

#[derive(Clone)]
pub enum Msg {
    UpdateValue {
        param_id: u32,
        name: String,
        value: String,
    },
    ExportModel,
    CloseExport,
}

use crate::api::PaymentsApi;
use crate::app::App;
use crate::utils::Table;

/// List the connections the current user may send money to.
pub fn execute<C: PaymentsApi + Sync>(app: &App<C>) -> Result<(), String> {
    let connections = app.connections();
    if connections.is_empty() {
        println!("No connections yet");
        return Ok(());
    }

    let mut table = Table::new(vec!["User id", "Name", "Email"]);
    for connection in connections {
        table.add_row(vec![
            connection.user_id.to_string(),
            connection.name.clone().unwrap_or_default(),
            connection.email.clone().unwrap_or_default(),
        ]);
    }
    println!("My Connections\n\n{}", table.render());
    Ok(())
}

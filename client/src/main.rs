//! Terminal frontend for the employee record service.
//!
//! # Design
//! The binary is the host in the host-does-IO split: it owns the ureq agent
//! and executes the `Request` values the library builds, feeding the raw
//! `Response` back in. All state transitions live in `staffdesk_client::App`;
//! this file only reads lines, dispatches commands, and prints.

use std::env;
use std::io::{self, BufRead, Write};

use staffdesk_client::{App, Employee, EmployeeApi, Field, Method, Request, Response};

fn main() {
    let base_url =
        env::var("STAFFDESK_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut app = App::new(EmployeeApi::new(&base_url));

    println!("staffdesk: employee records at {base_url}");
    println!("type 'help' for commands");

    if let Err(err) = reload(&agent, &mut app) {
        eprintln!("could not load employees: {err}");
    } else {
        render_list(app.employees());
    }

    let stdin = io::stdin();
    loop {
        print!("{}", prompt(&app));
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("stdin error: {err}");
                break;
            }
        }

        if !dispatch(&agent, &mut app, line.trim()) {
            break;
        }
    }
}

fn prompt(app: &App) -> String {
    match app.editing() {
        Some(id) => format!("edit {id}> "),
        None => "> ".to_string(),
    }
}

/// Handle one command line. Returns false when the operator asked to quit.
fn dispatch(agent: &ureq::Agent, app: &mut App, line: &str) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "help" => print_help(),
        "list" => match reload(agent, app) {
            Ok(()) => render_list(app.employees()),
            Err(err) => eprintln!("could not load employees: {err}"),
        },
        "set" => set_field(app, rest),
        "show" => render_draft(app),
        "new" | "cancel" => {
            app.cancel_edit();
            println!("draft cleared");
        }
        "edit" => start_edit(app, rest),
        "submit" => submit(agent, app),
        "delete" => delete(agent, app, rest),
        "quit" | "exit" => return false,
        other => eprintln!("unknown command {other:?}; type 'help'"),
    }
    true
}

fn print_help() {
    println!("commands:");
    println!("  list              fetch and show all employees");
    println!("  set FIELD VALUE   fill one draft field (name, email, designation,");
    println!("                    department, salary, doj, lastDay; dates YYYY-MM-DD)");
    println!("  show              show the current draft");
    println!("  edit N            load row N of the list into the draft for update");
    println!("  cancel | new      drop the draft and return to create mode");
    println!("  submit            validate the draft and create or update");
    println!("  delete N          delete row N of the list");
    println!("  quit              exit");
}

fn set_field(app: &mut App, rest: &str) {
    let (name, value) = match rest.split_once(char::is_whitespace) {
        Some((name, value)) => (name, value.trim()),
        None => (rest, ""),
    };
    match Field::parse(name) {
        Some(field) => app.set_field(field, value),
        None => eprintln!("unknown field {name:?}"),
    }
}

/// Resolve a 1-based row number against the current snapshot.
fn row(app: &App, rest: &str) -> Option<Employee> {
    let index: usize = match rest.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("expected a row number, got {rest:?}");
            return None;
        }
    };
    match index.checked_sub(1).and_then(|i| app.employees().get(i)) {
        Some(employee) => Some(employee.clone()),
        None => {
            eprintln!("no row {index}; run 'list' first");
            None
        }
    }
}

fn start_edit(app: &mut App, rest: &str) {
    let Some(employee) = row(app, rest) else {
        return;
    };
    app.start_edit(employee.id);
    println!("editing {}; 'set' fields, then 'submit'", employee.name);
    render_draft(app);
}

fn submit(agent: &ureq::Agent, app: &mut App) {
    let request = match app.build_submit() {
        Ok(request) => request,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let response = match execute(agent, request) {
        Ok(response) => response,
        Err(err) => {
            eprintln!("request failed: {err}");
            return;
        }
    };
    match app.apply_submit(response) {
        Ok(employee) => {
            println!("saved {}", employee.name);
            match reload(agent, app) {
                Ok(()) => render_list(app.employees()),
                Err(err) => eprintln!("saved, but reload failed: {err}"),
            }
        }
        Err(err) => eprintln!("{err}"),
    }
}

fn delete(agent: &ureq::Agent, app: &mut App, rest: &str) {
    let Some(employee) = row(app, rest) else {
        return;
    };
    let response = match execute(agent, app.build_delete(employee.id)) {
        Ok(response) => response,
        Err(err) => {
            eprintln!("request failed: {err}");
            return;
        }
    };
    match app.apply_delete(response) {
        Ok(()) => {
            println!("deleted {}", employee.name);
            match reload(agent, app) {
                Ok(()) => render_list(app.employees()),
                Err(err) => eprintln!("deleted, but reload failed: {err}"),
            }
        }
        Err(err) => eprintln!("{err}"),
    }
}

fn reload(agent: &ureq::Agent, app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    let response = execute(agent, app.build_load())?;
    app.apply_load(response)?;
    Ok(())
}

fn render_list(employees: &[Employee]) {
    if employees.is_empty() {
        println!("no employees yet");
        return;
    }
    println!(
        "{:>3}  {:<20} {:<26} {:<16} {:<14} {:>10}  {:<10} {:<10}",
        "#", "name", "email", "designation", "department", "salary", "doj", "last day"
    );
    for (index, e) in employees.iter().enumerate() {
        println!(
            "{:>3}  {:<20} {:<26} {:<16} {:<14} {:>10.2}  {:<10} {:<10}",
            index + 1,
            e.name,
            e.email,
            e.designation,
            e.department,
            e.salary,
            e.doj,
            e.last_day.map(|d| d.to_string()).unwrap_or_default(),
        );
    }
}

fn render_draft(app: &App) {
    let draft = app.draft();
    let mode = match app.editing() {
        Some(id) => format!("update {id}"),
        None => "create".to_string(),
    };
    println!("draft ({mode}):");
    println!("  name:        {}", draft.name);
    println!("  email:       {}", draft.email);
    println!("  designation: {}", draft.designation);
    println!("  department:  {}", draft.department);
    println!("  salary:      {}", draft.salary);
    println!("  doj:         {}", draft.doj);
    println!("  lastDay:     {}", draft.last_day);
}

/// Execute a `Request` over the wire. Non-2xx statuses come back as data so
/// the library's parsers can interpret them.
fn execute(agent: &ureq::Agent, request: Request) -> Result<Response, ureq::Error> {
    let mut response = match (request.method, request.json_body) {
        (Method::Get, _) => agent.get(&request.url).call()?,
        (Method::Delete, _) => agent.delete(&request.url).call()?,
        (Method::Post, Some(body)) => agent
            .post(&request.url)
            .content_type("application/json")
            .send(body.as_bytes())?,
        (Method::Post, None) => agent.post(&request.url).send_empty()?,
        (Method::Put, Some(body)) => agent
            .put(&request.url)
            .content_type("application/json")
            .send(body.as_bytes())?,
        (Method::Put, None) => agent.put(&request.url).send_empty()?,
    };

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    Ok(Response { status, body })
}

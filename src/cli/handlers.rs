use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::store::{HABITS_SLOT, Store, TODOS_SLOT, data_dir};
use crate::model::habit::Habit;
use crate::model::item::{Item, ItemFields, Priority};
use crate::ops::{habit_ops, item_ops};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let store = open_store(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        // No subcommand is handled in main.rs (launches the TUI)
        return Ok(());
    };

    match command {
        Commands::Add(args) => cmd_add(&store, args),
        Commands::List(args) => cmd_list(&store, args, json),
        Commands::Done(args) => cmd_done(&store, args),
        Commands::Edit(args) => cmd_edit(&store, args),
        Commands::Rm(args) => cmd_rm(&store, args),
        Commands::Habit(args) => {
            if let Some(text) = args.text {
                cmd_habit_add(&store, &text)
            } else {
                cmd_habit_list(&store, json)
            }
        }
        Commands::HabitToggle(args) => cmd_habit_toggle(&store, args),
        Commands::HabitRm(args) => cmd_habit_rm(&store, args),
    }
}

fn open_store(data_dir_flag: Option<&str>) -> Result<Store, Box<dyn std::error::Error>> {
    let dir = data_dir(data_dir_flag.map(PathBuf::from).as_deref());
    Ok(Store::open(dir)?)
}

// ---------------------------------------------------------------------------
// Todo commands
// ---------------------------------------------------------------------------

fn cmd_add(store: &Store, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let fields = ItemFields {
        text: args.title,
        description: args.desc,
        priority: parse_priority(args.priority.as_deref())?,
        due_date: parse_due(args.due.as_deref())?,
    };

    let items: Vec<Item> = store.load_or_default(TODOS_SLOT);
    let next = item_ops::add(&items, fields)?;
    store.save(TODOS_SLOT, &next)?;

    // The new entry is the appended one
    let added = next.last().expect("add always appends");
    println!("added {} ({})", added.key, added.text);
    Ok(())
}

fn cmd_list(store: &Store, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let items: Vec<Item> = store.load_or_default(TODOS_SLOT);
    let filtered: Vec<Item> = items
        .into_iter()
        .filter(|item| {
            if args.pending {
                !item.completed
            } else if args.completed {
                item.completed
            } else {
                true
            }
        })
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&TodoListJson { todos: &filtered })?
        );
    } else if filtered.is_empty() {
        println!("No todos. Add your first one with `td add`.");
    } else {
        for item in &filtered {
            println!("{}", format_todo_line(item));
        }
    }
    Ok(())
}

fn cmd_done(store: &Store, args: DoneArgs) -> Result<(), Box<dyn std::error::Error>> {
    let items: Vec<Item> = store.load_or_default(TODOS_SLOT);
    require_key(&items, &args.key)?;
    let next = item_ops::toggle_completed_by_key(&items, &args.key);
    store.save(TODOS_SLOT, &next)?;

    let toggled = next
        .iter()
        .find(|i| i.key == args.key)
        .expect("key checked above");
    let state = if toggled.completed { "done" } else { "pending" };
    println!("{} {} ({})", state, toggled.key, toggled.text);
    Ok(())
}

fn cmd_edit(store: &Store, args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let items: Vec<Item> = store.load_or_default(TODOS_SLOT);
    let existing = require_key(&items, &args.key)?;

    // Carry over unedited fields from the existing entry; the store's
    // upsert replaces all editable fields wholesale.
    let mut fields = existing.fields();
    if let Some(title) = args.title {
        fields.text = title;
    }
    if let Some(desc) = args.desc {
        fields.description = desc;
    }
    if let Some(p) = args.priority.as_deref() {
        fields.priority = parse_priority(Some(p))?;
    }
    if let Some(due) = args.due.as_deref() {
        fields.due_date = parse_due(Some(due))?;
    }

    let next = item_ops::upsert_by_key(&items, &args.key, fields)?;
    store.save(TODOS_SLOT, &next)?;
    println!("updated {}", args.key);
    Ok(())
}

fn cmd_rm(store: &Store, args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let items: Vec<Item> = store.load_or_default(TODOS_SLOT);
    require_key(&items, &args.key)?;
    let next = item_ops::remove_by_key(&items, &args.key);
    store.save(TODOS_SLOT, &next)?;
    println!("deleted {}", args.key);
    Ok(())
}

// ---------------------------------------------------------------------------
// Habit commands
// ---------------------------------------------------------------------------

fn cmd_habit_add(store: &Store, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let habits: Vec<Habit> = store.load_or_default(HABITS_SLOT);
    let next = habit_ops::add_habit(&habits, text)?;
    store.save(HABITS_SLOT, &next)?;
    let added = next.last().expect("add always appends");
    println!("added habit {} ({})", added.id, added.text);
    Ok(())
}

fn cmd_habit_list(store: &Store, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let habits: Vec<Habit> = store.load_or_default(HABITS_SLOT);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&HabitListJson { habits: &habits })?
        );
    } else if habits.is_empty() {
        println!("No habits. Add one with `td habit <text>`.");
    } else {
        for habit in &habits {
            println!("{}", format_habit_line(habit));
        }
    }
    Ok(())
}

fn cmd_habit_toggle(store: &Store, args: HabitToggleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let habits: Vec<Habit> = store.load_or_default(HABITS_SLOT);
    if !habits.iter().any(|h| h.id == args.id) {
        return Err(format!("no habit with id {}", args.id).into());
    }
    let next = habit_ops::toggle_habit(&habits, &args.id);
    store.save(HABITS_SLOT, &next)?;
    println!("toggled {}", args.id);
    Ok(())
}

fn cmd_habit_rm(store: &Store, args: HabitRmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let habits: Vec<Habit> = store.load_or_default(HABITS_SLOT);
    if !habits.iter().any(|h| h.id == args.id) {
        return Err(format!("no habit with id {}", args.id).into());
    }
    let next = habit_ops::remove_habit(&habits, &args.id);
    store.save(HABITS_SLOT, &next)?;
    println!("deleted habit {}", args.id);
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn require_key<'a>(items: &'a [Item], key: &str) -> Result<&'a Item, Box<dyn std::error::Error>> {
    items
        .iter()
        .find(|i| i.key == key)
        .ok_or_else(|| format!("no todo with key {}", key).into())
}

fn parse_priority(arg: Option<&str>) -> Result<Priority, Box<dyn std::error::Error>> {
    match arg {
        None => Ok(Priority::default()),
        Some(s) => {
            Priority::parse(s).ok_or_else(|| format!("invalid priority '{}' (expected low, medium, or high)", s).into())
        }
    }
}

/// Validate a due-date flag: empty clears the deadline, otherwise it must
/// be a real YYYY-MM-DD date.
fn parse_due(arg: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match arg {
        None => Ok(String::new()),
        Some("") => Ok(String::new()),
        Some(s) => {
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| format!("invalid due date '{}' (expected YYYY-MM-DD)", s))?;
            Ok(s.to_string())
        }
    }
}

//! Interactive menu loop for the student catalog.
//!
//! # Responsibility
//! - Collect and validate field input, retrying until each value passes.
//! - Call service operations and render their outcomes.
//!
//! # Invariants
//! - Values failing a validation predicate never reach the repository.
//! - EOF on stdin ends the loop cleanly instead of erroring.

use roster_core::{
    is_valid_address, is_valid_age, is_valid_id, is_valid_name, RepoError, Student,
    StudentRepository, StudentService,
};
use std::io::{self, BufRead, Write};

/// Runs the menu loop until the user exits or stdin closes.
pub fn run<R: StudentRepository>(service: &StudentService<R>) -> io::Result<()> {
    loop {
        println!();
        println!("========== Student Catalog ==========");
        println!("1. Add student");
        println!("2. Delete student");
        println!("3. Update student");
        println!("4. List students");
        println!("5. Exit");
        println!("=====================================");

        let Some(choice) = prompt("Choose an option: ")? else {
            return Ok(());
        };

        let keep_going = match choice.trim() {
            "1" => add_student(service)?,
            "2" => delete_student(service)?,
            "3" => update_student(service)?,
            "4" => list_students(service),
            "5" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => {
                println!("No such option, try again");
                true
            }
        };

        if !keep_going {
            return Ok(());
        }
    }
}

fn add_student<R: StudentRepository>(service: &StudentService<R>) -> io::Result<bool> {
    let id = loop {
        let Some(value) = prompt("Student id: ")? else {
            return Ok(false);
        };
        if !is_valid_id(&value) {
            println!("✗ id must be non-blank and at most 50 characters");
            continue;
        }
        match service.student_exists(&value) {
            Ok(false) => break value,
            Ok(true) => println!("✗ that id already exists, choose another"),
            Err(err) => {
                println!("✗ could not check the id: {err}");
                return Ok(true);
            }
        }
    };

    let Some(name) = prompt_name()? else {
        return Ok(false);
    };
    let Some(age) = prompt_age()? else {
        return Ok(false);
    };
    let Some(address) = prompt_address()? else {
        return Ok(false);
    };

    let student = Student::new(id, name, age, address);
    match service.register_student(&student) {
        Ok(()) => println!("✓ student added"),
        // The existence pre-check is advisory; the store can still report a
        // duplicate written in between.
        Err(RepoError::DuplicateId(id)) => println!("✗ student id {id} already exists"),
        Err(err) => println!("✗ add failed: {err}"),
    }
    Ok(true)
}

fn delete_student<R: StudentRepository>(service: &StudentService<R>) -> io::Result<bool> {
    let Some(id) = prompt("Id of the student to delete: ")? else {
        return Ok(false);
    };

    match service.remove_student(&id) {
        Ok(()) => println!("✓ student {id} deleted"),
        Err(RepoError::NotFound(_)) => println!("✗ no student with id {id}"),
        Err(err) => println!("✗ delete failed: {err}"),
    }
    Ok(true)
}

fn update_student<R: StudentRepository>(service: &StudentService<R>) -> io::Result<bool> {
    let Some(id) = prompt("Id of the student to update: ")? else {
        return Ok(false);
    };

    let mut student = match service.get_student(&id) {
        Ok(Some(student)) => student,
        Ok(None) => {
            println!("✗ no student with id {id}");
            return Ok(true);
        }
        Err(err) => {
            println!("✗ lookup failed: {err}");
            return Ok(true);
        }
    };

    println!();
    println!("Current record:");
    println!("  id:      {}", student.id);
    println!("  name:    {}", student.name);
    println!("  age:     {}", student.age);
    println!("  address: {}", student.address);

    let Some(field) = prompt("Field to change (name/age/address): ")? else {
        return Ok(false);
    };

    match field.trim() {
        "name" => {
            let Some(name) = prompt_name()? else {
                return Ok(false);
            };
            student.name = name;
        }
        "age" => {
            let Some(age) = prompt_age()? else {
                return Ok(false);
            };
            student.age = age;
        }
        "address" => {
            let Some(address) = prompt_address()? else {
                return Ok(false);
            };
            student.address = address;
        }
        other => {
            println!("✗ unknown field `{other}`");
            return Ok(true);
        }
    }

    match service.update_student(&student) {
        Ok(()) => println!("✓ student updated"),
        Err(RepoError::NotFound(_)) => println!("✗ no student with id {id}"),
        Err(err) => println!("✗ update failed: {err}"),
    }
    Ok(true)
}

fn list_students<R: StudentRepository>(service: &StudentService<R>) -> bool {
    let students = match service.list_students() {
        Ok(students) => students,
        Err(err) => {
            println!("✗ listing failed: {err}");
            return true;
        }
    };

    if students.is_empty() {
        println!("No student records yet");
        return true;
    }

    println!();
    println!("==================== Students ====================");
    println!("{:<15} {:<20} {:>3}  {}", "id", "name", "age", "address");
    println!("--------------------------------------------------");
    for student in &students {
        println!(
            "{:<15} {:<20} {:>3}  {}",
            student.id, student.name, student.age, student.address
        );
    }
    println!("==================================================");
    println!("{} record(s) found", students.len());
    true
}

fn prompt_name() -> io::Result<Option<String>> {
    loop {
        let Some(value) = prompt("Student name: ")? else {
            return Ok(None);
        };
        if is_valid_name(&value) {
            return Ok(Some(value));
        }
        println!("✗ name must be non-blank and at most 100 characters");
    }
}

fn prompt_age() -> io::Result<Option<i32>> {
    loop {
        let Some(value) = prompt("Student age: ")? else {
            return Ok(None);
        };
        let Ok(age) = value.trim().parse::<i32>() else {
            println!("✗ enter a whole number");
            continue;
        };
        if is_valid_age(age) {
            return Ok(Some(age));
        }
        println!("✗ age must be between 1 and 150");
    }
}

fn prompt_address() -> io::Result<Option<String>> {
    loop {
        let Some(value) = prompt("Home address: ")? else {
            return Ok(None);
        };
        if is_valid_address(&value) {
            return Ok(Some(value));
        }
        println!("✗ address must be non-blank and at most 200 characters");
    }
}

/// Prints `label` and reads one line. `None` means stdin reached EOF.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

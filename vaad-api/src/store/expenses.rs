use chrono::{Datelike, Utc};
use shared_types::{
    ActivityType, CategoryTotal, CreateExpenseRequest, Expense, ExpenseCategory, ExpenseSummary,
    UpdateExpenseRequest,
};
use uuid::Uuid;

use super::activity::log_activity;
use super::{Store, StoreError, StoreResult};

impl Store {
    /// Expenses newest date first, optionally narrowed to one category
    pub fn list_expenses(&self, category: Option<ExpenseCategory>) -> Vec<Expense> {
        let state = self.read();
        let mut expenses: Vec<Expense> = state
            .expenses
            .iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .cloned()
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses
    }

    pub fn create_expense(&self, req: CreateExpenseRequest) -> StoreResult<Expense> {
        let mut errors = Vec::new();
        if req.description.trim().is_empty() {
            errors.push("description is required".to_string());
        }
        if req.amount <= 0.0 {
            errors.push("amount must be positive".to_string());
        }
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let mut state = self.write();

        let expense = Expense {
            id: Uuid::new_v4(),
            date: req.date,
            category: req.category,
            description: req.description,
            amount: req.amount,
            paid_by: req.paid_by,
            notes: req.notes,
            receipt_image: req.receipt_image,
            created_at: Utc::now(),
        };

        state.expenses.push(expense.clone());
        log_activity(
            &mut state,
            format!("Added expense: {} - {}", expense.description, expense.amount),
            ActivityType::Add,
        );

        self.persist_data(&state)?;
        Ok(expense)
    }

    pub fn update_expense(&self, id: Uuid, req: UpdateExpenseRequest) -> StoreResult<Expense> {
        let mut state = self.write();

        let index = state
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::ExpenseNotFound)?;

        if let Some(amount) = req.amount {
            if amount <= 0.0 {
                return Err(StoreError::Validation(vec![
                    "amount must be positive".to_string(),
                ]));
            }
        }

        {
            let expense = &mut state.expenses[index];
            if let Some(date) = req.date {
                expense.date = date;
            }
            if let Some(category) = req.category {
                expense.category = category;
            }
            if let Some(description) = req.description {
                expense.description = description;
            }
            if let Some(amount) = req.amount {
                expense.amount = amount;
            }
            if req.paid_by.is_some() {
                expense.paid_by = req.paid_by;
            }
            if req.notes.is_some() {
                expense.notes = req.notes;
            }
            if req.receipt_image.is_some() {
                expense.receipt_image = req.receipt_image;
            }
        }

        let expense = state.expenses[index].clone();
        log_activity(
            &mut state,
            format!("Updated expense: {}", expense.description),
            ActivityType::Edit,
        );

        self.persist_data(&state)?;
        Ok(expense)
    }

    pub fn delete_expense(&self, id: Uuid) -> StoreResult<()> {
        let mut state = self.write();

        let expense = state
            .expenses
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::ExpenseNotFound)?;

        state.expenses.retain(|e| e.id != id);
        log_activity(
            &mut state,
            format!("Deleted expense: {} - {}", expense.description, expense.amount),
            ActivityType::Delete,
        );

        self.persist_data(&state)?;
        Ok(())
    }

    /// Totals per category over all recorded expenses, plus rollups for
    /// the current calendar month and year. Categories with no expenses
    /// still appear with zeroes.
    pub fn expense_summary(&self) -> ExpenseSummary {
        let state = self.read();
        let today = Utc::now().date_naive();

        let categories = ExpenseCategory::ALL
            .iter()
            .map(|&category| {
                let matching = state.expenses.iter().filter(|e| e.category == category);
                let (mut total, mut count) = (0.0, 0);
                for expense in matching {
                    total += expense.amount;
                    count += 1;
                }
                CategoryTotal {
                    category,
                    total,
                    count,
                }
            })
            .collect();

        let monthly_total = state
            .expenses
            .iter()
            .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
            .map(|e| e.amount)
            .sum();
        let yearly_total = state
            .expenses
            .iter()
            .filter(|e| e.date.year() == today.year())
            .map(|e| e.amount)
            .sum();

        ExpenseSummary {
            categories,
            monthly_total,
            yearly_total,
        }
    }
}

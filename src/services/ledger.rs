//! Ledger service
//!
//! Provides the operations the presentation layer calls: adding and removing
//! entries, reset, CSV export/import and monthly summaries.

use tracing::info;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::CsvExport;
use crate::import;
use crate::models::{Amount, EntryDate, MonthKey, Transaction, TransactionId, TransactionKind};
use crate::reports::{filter_by_month, MonthlySummary};
use crate::storage::{KeyValueStore, Storage};

/// Values submitted from the entry form
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub kind: TransactionKind,
    /// Amount as typed; parsed leniently
    pub amount: String,
    pub category: Option<String>,
    pub memo: Option<String>,
    /// `YYYY-MM-DD`; today when absent
    pub date: Option<String>,
}

impl TransactionForm {
    /// An expense form with the given amount text
    pub fn expense(amount: impl Into<String>) -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount: amount.into(),
            ..Self::default()
        }
    }

    /// An income form with the given amount text
    pub fn income(amount: impl Into<String>) -> Self {
        Self {
            kind: TransactionKind::Income,
            amount: amount.into(),
            ..Self::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Outcome of a CSV import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportReport {
    /// Rows added to the ledger
    pub imported: usize,
    /// Columns that fell back to a default, across all rows
    pub defaulted_fields: usize,
    /// Rows with at least one defaulted column
    pub rows_with_defaults: usize,
}

/// Service for ledger operations
pub struct LedgerService<B: KeyValueStore> {
    storage: Storage<B>,
    settings: Settings,
    query_month: MonthKey,
}

impl<B: KeyValueStore> LedgerService<B> {
    /// Create a service viewing the current month
    pub fn new(storage: Storage<B>, settings: Settings) -> Self {
        Self {
            storage,
            settings,
            query_month: MonthKey::current(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn storage(&self) -> &Storage<B> {
        &self.storage
    }

    /// All transactions, newest-inserted first
    pub fn transactions(&self) -> &[Transaction] {
        self.storage.transactions.transactions()
    }

    pub fn find(&self, id: &TransactionId) -> Option<&Transaction> {
        self.storage.transactions.get(id)
    }

    /// Validate the form, record the transaction and return it
    pub fn add_transaction(&mut self, form: TransactionForm) -> LedgerResult<Transaction> {
        let amount = Amount::from_input(&form.amount)
            .ok_or_else(|| LedgerError::InvalidAmount(form.amount.clone()))?;

        let date = match form.date.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => EntryDate::parse(text)?,
            _ => EntryDate::today(),
        };

        let category = form
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| self.settings.default_category.clone());

        let txn = Transaction::new(
            form.kind,
            amount,
            category,
            form.memo.unwrap_or_default(),
            date,
        );

        self.storage.transactions.add(txn.clone())?;
        self.storage.log_create(&txn);
        info!(id = %txn.id, kind = %txn.kind, "transaction added");

        Ok(txn)
    }

    /// Remove every entry with `id`
    ///
    /// The store is rewritten even when nothing matched; that case is
    /// reported as [`LedgerError::NotFound`].
    pub fn remove_transaction(&mut self, id: &TransactionId) -> LedgerResult<usize> {
        let removed = self.storage.transactions.remove(id)?;
        for txn in &removed {
            self.storage.log_delete(txn);
        }

        if removed.is_empty() {
            return Err(LedgerError::transaction_not_found(id.as_str()));
        }

        info!(id = %id, count = removed.len(), "transaction removed");
        Ok(removed.len())
    }

    /// Drop every transaction and erase the persisted slot
    pub fn reset_all(&mut self) -> LedgerResult<usize> {
        let count = self.storage.transactions.reset()?;
        self.storage.log_reset(count);
        info!(count, "ledger reset");
        Ok(count)
    }

    /// Build the CSV export of the whole ledger, dated today
    pub fn export_csv(&self) -> CsvExport {
        CsvExport::new(self.transactions(), &EntryDate::today())
    }

    /// Parse CSV text and prepend its rows to the ledger
    ///
    /// A file without data rows is rejected before anything changes.
    pub fn import_csv(&mut self, contents: &str) -> LedgerResult<ImportReport> {
        let parsed = import::from_csv(contents)?;
        let defaulted_fields = parsed.defaulted_count();
        let rows_with_defaults = parsed.rows_with_defaults();

        let imported = self
            .storage
            .transactions
            .import_batch(parsed.into_transactions())?;
        self.storage.log_import(imported, defaulted_fields);
        info!(imported, defaulted_fields, "csv imported");

        Ok(ImportReport {
            imported,
            defaulted_fields,
            rows_with_defaults,
        })
    }

    pub fn set_query_month(&mut self, month: MonthKey) {
        self.query_month = month;
    }

    pub fn query_month(&self) -> &MonthKey {
        &self.query_month
    }

    /// Transactions in the query month
    pub fn monthly_transactions(&self) -> Vec<&Transaction> {
        filter_by_month(self.transactions(), &self.query_month)
    }

    /// Summary of the query month
    pub fn summary(&self) -> MonthlySummary {
        self.get_summary(&self.query_month)
    }

    /// Summary of any month
    pub fn get_summary(&self, month: &MonthKey) -> MonthlySummary {
        MonthlySummary::generate(self.transactions(), month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditLogger, Operation};
    use crate::export::CSV_HEADER;
    use crate::storage::{MemoryStore, STORAGE_KEY};
    use tempfile::TempDir;

    fn service() -> LedgerService<MemoryStore> {
        LedgerService::new(Storage::new(MemoryStore::new()), Settings::default())
    }

    fn month(text: &str) -> MonthKey {
        MonthKey::parse(text).unwrap()
    }

    #[test]
    fn test_add_transaction() {
        let mut service = service();
        let txn = service
            .add_transaction(
                TransactionForm::expense("12500")
                    .category("식비")
                    .memo("점심")
                    .date("2024-03-02"),
            )
            .unwrap();

        assert_eq!(txn.amount.value(), 12500.0);
        assert_eq!(txn.category, "식비");
        assert_eq!(txn.memo, "점심");
        assert_eq!(txn.date.as_str(), "2024-03-02");
        assert_eq!(service.transactions()[0].id, txn.id);
        assert!(service.storage().transactions.backend().contains(STORAGE_KEY));
    }

    #[test]
    fn test_add_rejects_bad_amounts_without_mutation() {
        let mut service = service();

        for text in ["", "abc", "0", "-0", "  "] {
            let err = service
                .add_transaction(TransactionForm::expense(text))
                .unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount(_)), "{text:?}");
        }
        assert!(service.transactions().is_empty());
    }

    #[test]
    fn test_add_stores_absolute_lenient_amount() {
        let mut service = service();
        let txn = service
            .add_transaction(TransactionForm::income("-12.5kg"))
            .unwrap();
        assert_eq!(txn.amount.value(), 12.5);
    }

    #[test]
    fn test_add_defaults() {
        let mut service = service();
        let txn = service
            .add_transaction(TransactionForm::expense("10").category("   "))
            .unwrap();

        assert_eq!(txn.category, "기타");
        assert_eq!(txn.memo, "");
        assert_eq!(txn.date, EntryDate::today());
    }

    #[test]
    fn test_add_rejects_bad_date() {
        let mut service = service();
        let err = service
            .add_transaction(TransactionForm::expense("10").date("2024/03/02"))
            .unwrap_err();

        assert!(matches!(err, LedgerError::Validation(_)));
        assert!(service.transactions().is_empty());
    }

    #[test]
    fn test_remove_transaction() {
        let mut service = service();
        let keep = service.add_transaction(TransactionForm::expense("1")).unwrap();
        let gone = service.add_transaction(TransactionForm::expense("2")).unwrap();

        assert_eq!(service.remove_transaction(&gone.id).unwrap(), 1);
        assert_eq!(service.transactions().len(), 1);
        assert_eq!(service.transactions()[0].id, keep.id);
    }

    #[test]
    fn test_remove_unknown_is_not_found() {
        let mut service = service();
        service.add_transaction(TransactionForm::expense("1")).unwrap();

        let err = service
            .remove_transaction(&TransactionId::from("missing"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(service.transactions().len(), 1);
    }

    #[test]
    fn test_reset_all() {
        let mut service = service();
        service.add_transaction(TransactionForm::expense("1")).unwrap();
        service.add_transaction(TransactionForm::income("2")).unwrap();

        assert_eq!(service.reset_all().unwrap(), 2);
        assert!(service.transactions().is_empty());
        assert!(!service.storage().transactions.backend().contains(STORAGE_KEY));
    }

    #[test]
    fn test_import_prepends_in_file_order() {
        let mut service = service();
        let existing = service.add_transaction(TransactionForm::expense("1")).unwrap();

        let text = format!(
            "{}\na,income,1000,기타,\"\",2024-03-01\nb,expense,abc,식비,\"x\",2024-03-02",
            CSV_HEADER
        );
        let report = service.import_csv(&text).unwrap();

        assert_eq!(
            report,
            ImportReport {
                imported: 2,
                defaulted_fields: 1,
                rows_with_defaults: 1,
            }
        );
        let ids: Vec<_> = service.transactions().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, [TransactionId::from("a"), TransactionId::from("b"), existing.id]);
        assert!(service.transactions()[1].amount.is_zero());
    }

    #[test]
    fn test_import_header_only_leaves_store_unchanged() {
        let mut service = service();
        service.add_transaction(TransactionForm::expense("1")).unwrap();

        let err = service.import_csv(CSV_HEADER).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidCsv(_)));
        assert_eq!(service.transactions().len(), 1);
    }

    #[test]
    fn test_import_accepts_duplicate_ids() {
        let mut service = service();
        let text = "h\nsame,income,1,기타,\"\",2024-03-01\nsame,income,2,기타,\"\",2024-03-01";
        service.import_csv(text).unwrap();

        assert_eq!(service.transactions().len(), 2);
        assert_eq!(service.remove_transaction(&TransactionId::from("same")).unwrap(), 2);
    }

    #[test]
    fn test_export_csv() {
        let mut service = service();
        service
            .add_transaction(TransactionForm::expense("300").category("식비").date("2024-03-02"))
            .unwrap();

        let export = service.export_csv();
        assert_eq!(export.file_name, format!("ledger_{}.csv", EntryDate::today()));
        assert!(export.body.starts_with(CSV_HEADER));
        assert!(export.body.ends_with(",300,식비,\"\",2024-03-02"));
    }

    #[test]
    fn test_summary_follows_query_month() {
        let mut service = service();
        service
            .add_transaction(TransactionForm::income("1000").date("2024-03-01"))
            .unwrap();
        service
            .add_transaction(TransactionForm::expense("300").category("식비").date("2024-03-02"))
            .unwrap();
        service
            .add_transaction(TransactionForm::expense("50").date("2024-04-01"))
            .unwrap();

        service.set_query_month(month("2024-03"));
        assert_eq!(service.query_month().as_str(), "2024-03");
        assert_eq!(service.monthly_transactions().len(), 2);

        let summary = service.summary();
        assert_eq!(summary.income.value(), 1000.0);
        assert_eq!(summary.expense.value(), 300.0);
        assert_eq!(summary.balance, 700.0);
        assert_eq!(summary.category_net.get("식비"), Some(300.0));
        assert_eq!(summary.category_net.get("기타"), Some(-1000.0));

        let april = service.get_summary(&month("2024-04"));
        assert_eq!(april.expense.value(), 50.0);
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let storage = Storage::new(MemoryStore::new()).with_audit(logger);
        let mut service = LedgerService::new(storage, Settings::default());

        let txn = service.add_transaction(TransactionForm::expense("5")).unwrap();
        service.remove_transaction(&txn.id).unwrap();
        service.import_csv("h\n1,income,1,기타,\"\",2024-01-01").unwrap();
        service.reset_all().unwrap();

        let ops: Vec<_> = service
            .storage()
            .audit()
            .unwrap()
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(
            ops,
            [Operation::Create, Operation::Delete, Operation::Import, Operation::Reset]
        );
    }
}
